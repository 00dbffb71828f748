/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

macro_rules! obj_from_call {
    ( $c:expr, $method:expr, $params:expr, $rt:ty ) => {{
        let response = $c.call($method, $params).await?;
        let document = response.parse()?;
        let root = document.root_element();
        if !root.children().any(|n| n.is_element()) {
            return Err(FleakrError::ResponseMissing());
        }
        <$rt>::from_node($c.clone(), root)
    }};
}

macro_rules! objs_from_call {
    ( $c:expr, $method:expr, $params:expr, $path:expr, $rt:ty ) => {{
        let response = $c.call($method, $params).await?;
        let document = response.parse()?;
        crate::rest::attributes::select_all(document.root_element(), $path)
            .into_iter()
            .map(|node| <$rt>::from_node($c.clone(), node))
            .collect::<Vec<$rt>>()
    }};
}

pub(crate) use {obj_from_call, objs_from_call};
