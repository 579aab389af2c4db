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

//! Concrete parts of the class diagram.
//!
//! - [`Cl3`]: stateless leaf helper.
//! - [`Cl2`]: implements `If2`, composes `Cl3` helpers.
//! - [`Cl1`]: aggregates shared `If1` parts and reuses `Cl2`'s behavior.
//! - [`ImplIf3`]: sole implementor of the independent `If3` capability.

mod cl1;
mod cl2;
mod cl3;
mod impl_if3;

pub use self::cl1::Cl1;
pub use self::cl2::Cl2;
pub use self::cl3::Cl3;
pub use self::impl_if3::ImplIf3;
