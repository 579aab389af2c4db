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

use super::if1::If1;

/// Extended capability: everything [`If1`] requires plus a second operation.
///
/// Interface inheritance from the diagram; every `If2` implementor is
/// usable wherever an `If1` is expected.
pub trait If2: If1 {
    /// Executes the second operation, writing one identifying line to stdout.
    fn meth2(&self);
}
