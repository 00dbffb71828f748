/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

mod api;
mod attributes;
pub mod client;
pub mod errors;
pub mod group;
mod macros;
pub mod photo;
pub mod properties;
pub mod search;
pub mod set;
#[cfg(test)]
mod testing;
pub mod user;

pub use api::*;
pub use attributes::{to_flag, to_int};
pub use client::*;
pub use errors::*;
pub use group::*;
pub use photo::*;
pub use properties::*;
pub use search::*;
pub use set::*;
pub use user::*;
