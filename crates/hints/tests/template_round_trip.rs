use guess_hints::{ConceptKind, HintParam, HintTemplates, Parity, HINT_TEMPLATES};
use proptest::prelude::*;

/// Placeholder names in template order.
fn placeholders(text: &str) -> Vec<&str> {
    text.split('{')
        .skip(1)
        .filter_map(|rest| rest.split_once('}').map(|(name, _)| name))
        .collect()
}

fn params_for(names: &[&str], value: i64, count: i64, parity: Parity) -> Vec<HintParam> {
    names
        .iter()
        .map(|name| match *name {
            "value" => HintParam::Int(value),
            "count" => HintParam::Int(count),
            "parity" => HintParam::Parity(parity),
            other => panic!("unexpected placeholder {other}"),
        })
        .collect()
}

fn parity_strategy() -> impl Strategy<Value = Parity> {
    prop_oneof![Just(Parity::Even), Just(Parity::Odd)]
}

proptest! {
    #[test]
    fn extract_inverts_render(
        value in any::<i64>(),
        count in 0i64..1_000,
        parity in parity_strategy(),
    ) {
        for template in HINT_TEMPLATES {
            let names = placeholders(template.text);
            let params = params_for(&names, value, count, parity);
            let text = HintTemplates::render(template.concept, template.shape, &params).unwrap();

            let extracted = HintTemplates::extract(template.concept, template.shape, &text).unwrap();
            prop_assert_eq!(extracted, Some(params.clone()));

            let parsed = HintTemplates::parse(template.concept, &text).unwrap().unwrap();
            prop_assert_eq!(parsed.shape, template.shape);
            prop_assert_eq!(parsed.params, params);
        }
    }

    #[test]
    fn rendered_text_belongs_to_one_concept(
        value in -10_000i64..10_000,
        count in 0i64..20,
        parity in parity_strategy(),
    ) {
        for template in HINT_TEMPLATES {
            let params = params_for(&placeholders(template.text), value, count, parity);
            let text = HintTemplates::render(template.concept, template.shape, &params).unwrap();
            let owners: Vec<ConceptKind> = ConceptKind::ALL
                .into_iter()
                .filter(|kind| HintTemplates::parse(*kind, &text).unwrap().is_some())
                .collect();
            prop_assert_eq!(owners, vec![template.concept]);
        }
    }
}

#[test]
fn every_concept_has_a_main_template() {
    for kind in ConceptKind::ALL {
        assert!(
            HintTemplates::shapes(kind).contains(&guess_hints::HintShape::Main),
            "{kind} lacks a main template"
        );
    }
}
