// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the capability contracts of the class diagram.
//!
//! These traits carry no implementation; concrete parts in
//! [`crate::parts`] provide the behavior.
//!
//! - [`If1`]: the base capability, one operation.
//! - [`If2`]: extends [`If1`] with a second operation.
//! - [`If3`]: an independent capability, unrelated to the other two.

mod if1;
mod if2;
mod if3;

pub use self::if1::If1;
pub use self::if2::If2;
pub use self::if3::If3;
