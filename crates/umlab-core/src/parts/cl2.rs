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

use super::cl3::Cl3;

/// Composite implementing [`If2`] (and therefore [`If1`]).
///
/// Owns an insertion-ordered collection of shared [`Cl3`] handles. The
/// collection only grows; there is no removal operation. Duplicates are
/// permitted, and a handle attached here may also be held elsewhere.
#[derive(Debug, Default)]
pub struct Cl2 {
    cl3_parts: Vec<Arc<Cl3>>,
}

impl Cl2 {
    /// Creates a `Cl2` with no attached helpers.
    pub fn new() -> Self {
        Self {
            cl3_parts: Vec::new(),
        }
    }

    /// Appends a shared [`Cl3`] handle to the internal collection.
    ///
    /// Insertion order is preserved. Attaching never consumes the helper:
    /// the caller may keep its own handle or attach the same one again.
    pub fn add_cl3(&mut self, helper: Arc<Cl3>) {
        log::trace!("Cl2: attaching Cl3 helper #{}.", self.cl3_parts.len() + 1);
        self.cl3_parts.push(helper);
    }

    /// Read-only view of the attached helpers, in insertion order.
    pub fn cl3_parts(&self) -> &[Arc<Cl3>] {
        &self.cl3_parts
    }
}

impl If1 for Cl2 {
    fn meth1(&self) {
        println!("Cl2::meth1()");
    }
}

impl If2 for Cl2 {
    fn meth2(&self) {
        println!("Cl2::meth2()");
        for helper in &self.cl3_parts {
            helper.show();
        }
    }
}
