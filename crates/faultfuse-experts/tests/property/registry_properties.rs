use std::collections::BTreeSet;

use faultfuse_core::config::{BuiltinExpertKind, ExpertsConfig};
use faultfuse_experts::ExpertRegistry;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Register(usize, f64),
    Unregister(usize),
    UpdateWeight(usize, f64),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..3usize, -1.0f64..6.0).prop_map(|(k, w)| Op::Register(k, w)),
        (0..3usize).prop_map(Op::Unregister),
        (0..3usize, -1.0f64..6.0).prop_map(|(k, w)| Op::UpdateWeight(k, w)),
    ]
}

proptest! {
    #[test]
    fn registry_invariants_hold_under_any_sequence(ops in proptest::collection::vec(arb_op(), 0..40)) {
        let config = ExpertsConfig::default();
        let mut registry = ExpertRegistry::new();
        let mut model: Vec<&'static str> = Vec::new();

        for op in ops {
            match op {
                Op::Register(k, w) => {
                    let kind = BuiltinExpertKind::ALL[k];
                    let ok = registry.register_builtin(kind, Some(w), &config).is_ok();
                    let expected = (0.0..=5.0).contains(&w) && !model.contains(&kind.expert_name());
                    prop_assert_eq!(ok, expected);
                    if ok {
                        model.push(kind.expert_name());
                    }
                }
                Op::Unregister(k) => {
                    let name = BuiltinExpertKind::ALL[k].expert_name();
                    let removed = registry.unregister(name);
                    prop_assert_eq!(removed, model.contains(&name));
                    model.retain(|n| *n != name);
                }
                Op::UpdateWeight(k, w) => {
                    let name = BuiltinExpertKind::ALL[k].expert_name();
                    let _ = registry.update_weight(name, w);
                }
            }

            prop_assert_eq!(registry.names(), model.clone());
            let unique: BTreeSet<&str> = registry.names().into_iter().collect();
            prop_assert_eq!(unique.len(), registry.len());
            for e in registry.list_all() {
                prop_assert!((0.0..=5.0).contains(&e.weight));
            }
        }
    }
}
