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

//! Assembly tests wiring the full object graph the way the sandbox does.

use std::sync::{Arc, Mutex};

use umlab_core::{Cl1, Cl2, Cl3, If1, If2, If3, ImplIf3};

/// Records each `meth1()` call into a shared journal.
#[derive(Debug)]
struct RecordingPart {
    id: usize,
    journal: Arc<Mutex<Vec<usize>>>,
}

impl If1 for RecordingPart {
    fn meth1(&self) {
        self.journal.lock().unwrap().push(self.id);
    }
}

#[test]
fn full_demonstration_graph_assembles_and_runs() {
    let cl3_a = Arc::new(Cl3::new());
    let cl3_b = Arc::new(Cl3::new());

    let mut cl2 = Cl2::new();
    cl2.add_cl3(Arc::clone(&cl3_a));
    cl2.add_cl3(Arc::clone(&cl3_b));
    let cl2 = Arc::new(cl2);

    let mut cl1 = Cl1::new();
    cl1.add_part(cl2.clone());

    // The driver keeps its own handle alive next to Cl1's part reference.
    assert_eq!(Arc::strong_count(&cl2), 2);
    assert_eq!(cl1.parts().len(), 1);
    assert_eq!(cl2.cl3_parts().len(), 2);
    assert!(Arc::ptr_eq(&cl2.cl3_parts()[0], &cl3_a));
    assert!(Arc::ptr_eq(&cl2.cl3_parts()[1], &cl3_b));

    cl1.use_parts();
    cl2.meth2();

    let if3: Box<dyn If3> = Box::new(ImplIf3::new());
    if3.meth3();

    // Nothing consumed anything: two composite-side holders per Cl3
    // (the Cl2 collection and the local binding).
    assert_eq!(Arc::strong_count(&cl3_a), 2);
    assert_eq!(Arc::strong_count(&cl3_b), 2);
}

#[test]
fn traversal_mixes_concrete_variants_in_insertion_order() {
    let journal = Arc::new(Mutex::new(Vec::new()));

    let mut cl1 = Cl1::new();
    cl1.add_part(Arc::new(RecordingPart {
        id: 1,
        journal: Arc::clone(&journal),
    }));
    cl1.add_part(Arc::new(Cl2::new()));
    cl1.add_part(Arc::new(RecordingPart {
        id: 2,
        journal: Arc::clone(&journal),
    }));

    cl1.use_parts();

    // The Cl2 in the middle only prints; the probes around it show that
    // every part was visited exactly once, in order.
    assert_eq!(*journal.lock().unwrap(), vec![1, 2]);
}

#[test]
fn shared_cl3_is_observed_by_every_holding_composite() {
    let shared = Arc::new(Cl3::new());

    let mut left = Cl2::new();
    let mut right = Cl2::new();
    left.add_cl3(Arc::clone(&shared));
    right.add_cl3(Arc::clone(&shared));

    left.meth2();
    right.meth2();

    assert!(Arc::ptr_eq(&left.cl3_parts()[0], &right.cl3_parts()[0]));
    assert_eq!(Arc::strong_count(&shared), 3);
}

#[test]
fn cl1_passes_as_if2_with_delegated_behavior() {
    let mut cl1 = Cl1::new();
    cl1.add_cl3(Arc::new(Cl3::new()));

    // Usable through the extended capability; behavior comes from the
    // embedded Cl2.
    let as_if2: &dyn If2 = &cl1;
    as_if2.meth1();
    as_if2.meth2();
}
