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

use crate::capability::If3;

/// Sole concrete implementor of the independent [`If3`] capability.
#[derive(Debug, Default)]
pub struct ImplIf3;

impl ImplIf3 {
    /// Creates a new implementor.
    pub fn new() -> Self {
        Self
    }
}

impl If3 for ImplIf3 {
    fn meth3(&self) {
        println!("ImplIf3::meth3()");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meth3_is_reachable_through_the_trait() {
        let if3: Box<dyn If3> = Box::new(ImplIf3::new());
        if3.meth3();
        if3.meth3();
    }
}
