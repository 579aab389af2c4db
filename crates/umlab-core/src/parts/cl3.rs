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

/// Auxiliary leaf component with a single output operation.
///
/// `Cl3` carries no state besides identity; instances are shared among any
/// number of holders via `Arc<Cl3>` and released when the last handle drops.
#[derive(Debug, Default)]
pub struct Cl3;

impl Cl3 {
    /// Creates a new leaf helper.
    pub fn new() -> Self {
        Self
    }

    /// Writes the line identifying this helper to stdout.
    pub fn show(&self) {
        println!("Cl3::show()");
    }
}
