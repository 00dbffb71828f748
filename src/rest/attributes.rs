/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Maps fields of Flickr objects onto locations in an XML response.
//!
//! A location is written `path@attribute`, `path` or `@attribute`, where
//! `path` is a `/` separated list of element names. The first element name is
//! searched for in the context node and everything below it, the remaining
//! names must be direct children. With an attribute the value is read from the
//! matched element, otherwise the element's text is used.

use crate::rest::Client;
use crate::rest::errors::FleakrError;
use roxmltree::Node;

/// One field of an object along with the places its value may be found.
///
/// Locations are tried in order and the first one producing a value wins.
pub(crate) struct Attribute<F> {
    pub(crate) field: F,
    pub(crate) locations: &'static [&'static str],
}

impl<F> Attribute<F> {
    pub(crate) fn value_from(&self, context: Node<'_, '_>) -> Option<String> {
        self.locations
            .iter()
            .find_map(|location| extract_location(context, location))
    }
}

/// An object whose fields are declared with a static [`Attribute`] table
pub(crate) trait FlickrObject {
    type Field: Copy + PartialEq + 'static;

    const ATTRIBUTES: &'static [Attribute<Self::Field>];

    fn slot(&mut self, field: Self::Field) -> &mut Option<String>;

    /// Assigns every declared field that has a value in `context`
    fn populate_from(&mut self, context: Node<'_, '_>) {
        self.populate_fields(context, |_| true);
    }

    /// Assigns the selected fields that have a value in `context`.
    ///
    /// Fields without a value are left untouched.
    fn populate_fields(&mut self, context: Node<'_, '_>, include: impl Fn(Self::Field) -> bool) {
        for attribute in Self::ATTRIBUTES.iter().filter(|a| include(a.field)) {
            if let Some(value) = attribute.value_from(context) {
                *self.slot(attribute.field) = Some(value);
            }
        }
    }
}

/// An object with a group of fields only delivered by a separate "getInfo" style call
pub(crate) trait LazyObject: FlickrObject {
    /// Name used in errors
    const KIND: &'static str;
    const INFO_METHOD: &'static str;
    const ID_PARAM: &'static str;
    const DETAIL: &'static [Self::Field];

    fn client(&self) -> &Client;
    fn object_id(&self) -> Option<&str>;
    fn detail_loaded(&mut self) -> &mut bool;
}

/// Returns the value of `field`, fetching the detail group first when needed.
///
/// The detail call is made at most once per object: only when the requested
/// field is part of the detail group, has no value yet and the group has not
/// been loaded before.
pub(crate) async fn get<T: LazyObject>(
    object: &mut T,
    field: T::Field,
) -> Result<Option<&str>, FleakrError> {
    if T::DETAIL.contains(&field) && object.slot(field).is_none() && !*object.detail_loaded() {
        load_detail(object).await?;
    }
    Ok(object.slot(field).as_deref())
}

/// Fetches the detail group and assigns all of it in one pass
pub(crate) async fn load_detail<T: LazyObject>(object: &mut T) -> Result<(), FleakrError> {
    let id = object
        .object_id()
        .ok_or(FleakrError::MissingId(T::KIND))?
        .to_string();
    log::trace!("Loading {} details for {}", T::KIND, id);

    let params = [(T::ID_PARAM, id.as_str())];
    let response = object.client().call(T::INFO_METHOD, &params).await?;
    let document = response.parse()?;

    object.populate_fields(document.root_element(), |f| T::DETAIL.contains(&f));
    *object.detail_loaded() = true;
    Ok(())
}

/// Reads a single value from `context`.
///
/// Returns `None` when the element or attribute is not there.
pub fn extract(context: Node<'_, '_>, path: &str, attribute: Option<&str>) -> Option<String> {
    let target = select_first(context, path)?;
    match attribute {
        Some(name) => target.attribute(name).map(str::to_string),
        None => Some(text_of(target)),
    }
}

/// Reads a value using the combined `path@attribute` form
pub fn extract_location(context: Node<'_, '_>, location: &str) -> Option<String> {
    match location.split_once('@') {
        Some((path, attribute)) => extract(context, path, Some(attribute)),
        None => extract(context, location, None),
    }
}

/// Returns every element matching `path`, in document order
pub fn select_all<'a, 'input>(context: Node<'a, 'input>, path: &str) -> Vec<Node<'a, 'input>> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let Some((first, rest)) = segments.split_first() else {
        return vec![context];
    };

    let mut found = Vec::new();
    for start in context.descendants().filter(|n| n.has_tag_name(*first)) {
        collect_children(start, rest, &mut found);
    }
    found
}

fn select_first<'a, 'input>(context: Node<'a, 'input>, path: &str) -> Option<Node<'a, 'input>> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let Some((first, rest)) = segments.split_first() else {
        return Some(context);
    };

    context
        .descendants()
        .filter(|n| n.has_tag_name(*first))
        .find_map(|n| follow_children(n, rest))
}

fn follow_children<'a, 'input>(node: Node<'a, 'input>, rest: &[&str]) -> Option<Node<'a, 'input>> {
    match rest.split_first() {
        None => Some(node),
        Some((name, tail)) => node
            .children()
            .filter(|c| c.has_tag_name(*name))
            .find_map(|c| follow_children(c, tail)),
    }
}

fn collect_children<'a, 'input>(
    node: Node<'a, 'input>,
    rest: &[&str],
    found: &mut Vec<Node<'a, 'input>>,
) {
    match rest.split_first() {
        None => found.push(node),
        Some((name, tail)) => {
            for child in node.children().filter(|c| c.has_tag_name(*name)) {
                collect_children(child, tail, found);
            }
        }
    }
}

fn text_of(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Lenient integer coercion used for numeric flags and counts.
///
/// Skips leading whitespace, accepts an optional sign and reads the leading
/// decimal digits. Anything else, including a missing value, is `0`.
pub fn to_int(value: Option<&str>) -> i64 {
    let Some(value) = value else {
        return 0;
    };
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });
    if negative { -magnitude } else { magnitude }
}

/// A raw Flickr flag is set when it coerces to anything but zero
pub fn to_flag(value: Option<&str>) -> bool {
    to_int(value) != 0
}
