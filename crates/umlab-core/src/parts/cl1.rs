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

use std::sync::Arc;

use crate::capability::{If1, If2};

use super::cl2::Cl2;
use super::cl3::Cl3;

/// Aggregate root of the diagram.
///
/// The diagram derives `Cl1` from `Cl2`; here that inheritance is expressed
/// as composition. `Cl1` embeds a [`Cl2`] and delegates the inherited
/// operations to it, so a `Cl1` is usable wherever an [`If1`] or [`If2`]
/// is expected, with `Cl2`'s behavior. On top of that it keeps its own
/// insertion-ordered collection of shared [`If1`] parts.
#[derive(Debug, Default)]
pub struct Cl1 {
    base: Cl2,
    parts: Vec<Arc<dyn If1>>,
}

impl Cl1 {
    /// Creates a `Cl1` with an empty embedded [`Cl2`] and no parts.
    pub fn new() -> Self {
        Self {
            base: Cl2::new(),
            parts: Vec::new(),
        }
    }

    /// Appends a shared [`If1`] part.
    ///
    /// The part is held by reference, not exclusively: the same handle may
    /// live in other collections or stay with the caller. Insertion order
    /// is preserved and there is no removal operation.
    pub fn add_part(&mut self, part: Arc<dyn If1>) {
        log::trace!("Cl1: attaching If1 part #{}.", self.parts.len() + 1);
        self.parts.push(part);
    }

    /// Invokes `meth1()` on every attached part, in insertion order.
    ///
    /// An empty collection produces no output.
    pub fn use_parts(&self) {
        for part in &self.parts {
            part.meth1();
        }
    }

    /// Read-only view of the attached parts, in insertion order.
    pub fn parts(&self) -> &[Arc<dyn If1>] {
        &self.parts
    }

    /// Appends a shared [`Cl3`] handle to the embedded [`Cl2`]'s collection.
    pub fn add_cl3(&mut self, helper: Arc<Cl3>) {
        self.base.add_cl3(helper);
    }

    /// Read-only view of the embedded [`Cl2`]'s attached helpers.
    pub fn cl3_parts(&self) -> &[Arc<Cl3>] {
        self.base.cl3_parts()
    }
}

impl If1 for Cl1 {
    fn meth1(&self) {
        self.base.meth1();
    }
}

impl If2 for Cl1 {
    fn meth2(&self) {
        self.base.meth2();
    }
}
