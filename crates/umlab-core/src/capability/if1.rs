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

/// Base capability of the diagram.
///
/// Anything implementing `If1` can be attached to a [`Cl1`](crate::Cl1)
/// as a shared part and driven through its traversal. Implementors are
/// held as `Arc<dyn If1>`, hence the `Send + Sync` bounds.
pub trait If1: std::fmt::Debug + Send + Sync {
    /// Executes the first operation, writing one identifying line to stdout.
    fn meth1(&self);
}
