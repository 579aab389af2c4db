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

// Umlab Sandbox
// Main binary wiring the class diagram's object graph and running the
// fixed demonstration sequence.

use std::sync::Arc;

use anyhow::Result;
use umlab_core::{Cl1, Cl2, Cl3, If2, If3, ImplIf3};

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    log::info!("Assembling the object graph...");
    let cl3_a = Arc::new(Cl3::new());
    let cl3_b = Arc::new(Cl3::new());

    let mut cl2 = Cl2::new();
    cl2.add_cl3(Arc::clone(&cl3_a));
    cl2.add_cl3(Arc::clone(&cl3_b));
    let cl2 = Arc::new(cl2);

    let mut cl1 = Cl1::new();
    // Cl2 satisfies If1, so the same shared handle the driver keeps can
    // also live in Cl1's parts collection.
    cl1.add_part(cl2.clone());

    log::info!("Running the demonstration sequence...");
    cl1.use_parts();
    cl2.meth2();

    let if3: Box<dyn If3> = Box::new(ImplIf3::new());
    if3.meth3();

    log::info!("Demonstration complete.");
    Ok(())
}
