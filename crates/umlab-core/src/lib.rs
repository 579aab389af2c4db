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

//! # Umlab Core
//!
//! Foundational crate containing the capability traits and the concrete
//! parts of a small class-diagram demonstration: interface inheritance
//! (`If2: If1`), an independent capability (`If3`), composition (`Cl2`
//! owning `Cl3` helpers) and aggregation (`Cl1` holding shared `If1`
//! parts).

#![warn(missing_docs)]

pub mod capability;
pub mod parts;

pub use capability::{If1, If2, If3};
pub use parts::{Cl1, Cl2, Cl3, ImplIf3};
