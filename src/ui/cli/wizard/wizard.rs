use std::io::Write;

use anyhow::{Context, Result};
use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{EnumIter, EnumMessage, IntoStaticStr};

use crate::artifacts::SessionContext;
use crate::core::{FeatureDomain, FeatureValue, InputRecord};
use crate::model::Classifier;
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::render::{self, Prediction};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumMessage, IntoStaticStr)]
pub enum MenuAction {
    #[strum(
        message = "Predict purchase frequency",
        detailed_message = "Fill in customer data and run the classifier."
    )]
    Predict,
    #[strum(
        message = "About this app",
        detailed_message = "What the classes mean and how to use the form."
    )]
    About,
    #[strum(message = "Quit")]
    Quit,
}

fn menu_items() -> Vec<String> {
    MenuAction::iter()
        .map(|action| {
            let label = action.get_message().unwrap_or_else(|| action.into());
            match action.get_detailed_message() {
                Some(desc) => format!("{label}  {DIM_ITALIC}{desc}{RESET}"),
                None => label.to_string(),
            }
        })
        .collect()
}

/// Interactive session loop. Prediction runs only on the explicit menu
/// action, never as a side effect of editing an input; a failed prediction
/// renders an error banner and returns to the menu.
pub fn run<D: PromptDriver, W: Write>(ctx: &SessionContext, driver: &D, out: &mut W) -> Result<()> {
    let actions: Vec<MenuAction> = MenuAction::iter().collect();
    let items = menu_items();

    loop {
        let picked = driver.ask_select(
            "What would you like to do?",
            "↑/↓ to navigate, ↵ to select",
            &items,
            0,
        )?;

        match actions[picked] {
            MenuAction::Predict => match predict_once(ctx, driver) {
                Ok((record, prediction)) => {
                    render::write_prediction(out, &prediction, &record)
                        .context("writing prediction report")?;
                }
                Err(err) => {
                    render::write_error(out, &format!("{err:#}"))?;
                }
            },
            MenuAction::About => render::write_about(out)?,
            MenuAction::Quit => return Ok(()),
        }
    }
}

fn predict_once<D: PromptDriver>(
    ctx: &SessionContext,
    driver: &D,
) -> Result<(InputRecord, Prediction)> {
    let record = collect_record(ctx, driver)?;
    let label = ctx.model.classify(&record).context("classifying input")?;
    let probabilities = ctx
        .model
        .class_probabilities(&record)
        .context("estimating class probabilities")?;
    let prediction = Prediction::new(label, ctx.dataset.class_labels(), &probabilities);
    Ok((record, prediction))
}

/// One bound prompt per feature column, in schema order. Categorical columns
/// offer the dataset's sorted distinct values defaulting to the first;
/// numerical columns accept an integer in `[min, max]` defaulting to the
/// floor-division midpoint.
pub fn collect_record<D: PromptDriver>(
    ctx: &SessionContext,
    driver: &D,
) -> Result<InputRecord> {
    let mut record = InputRecord::new();
    for column in ctx.dataset.features() {
        let title = format!("Select {}", column.name);
        match &column.domain {
            FeatureDomain::Categorical { values } => {
                let picked = driver
                    .ask_select(&title, "Observed values from the dataset", values, 0)
                    .with_context(|| format!("reading '{}'", column.name))?;
                record.push(
                    column.name.clone(),
                    FeatureValue::Category(values[picked].clone()),
                );
            }
            FeatureDomain::Numerical { min, max } => {
                let (min, max) = (*min, *max);
                let default = (min + max).div_euclid(2);
                let answer = driver
                    .ask_i64(
                        &title,
                        &format!("Between {min} and {max}"),
                        default,
                        min,
                        max,
                    )
                    .with_context(|| format!("reading '{}'", column.name))?;
                record.push(column.name.clone(), FeatureValue::Number(answer));
            }
        }
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dataset;
    use crate::model::ModelArtifact;
    use crate::model::naive_bayes::{
        CategoryCounts, FeatureLikelihood, FeatureModel, GaussianStats, NaiveBayesModel,
    };
    use crate::testing::stubs::{Answer, AskedPrompt, ScriptedDriver};

    const CSV: &str = "\
Customer ID,Age,Gender,Category,Frequency of Purchases
1,18,Male,Clothing,Weekly
2,70,Female,Footwear,Annual
3,44,Female,Clothing,Monthly
4,25,Male,Accessories,Quarterly
5,61,Female,Clothing,Bi-weekly
";

    fn gaussian(per_class: &[(f64, f64)]) -> FeatureLikelihood {
        FeatureLikelihood::Gaussian {
            per_class: per_class
                .iter()
                .map(|&(mean, variance)| GaussianStats { mean, variance })
                .collect(),
        }
    }

    /// Same value counts replicated for every class; the tests here exercise
    /// the form flow, not the model's discrimination.
    fn frequency(pairs: &[(&str, f64)], n_classes: usize) -> FeatureLikelihood {
        let counts = CategoryCounts {
            counts: pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        };
        FeatureLikelihood::Frequency {
            per_class: vec![counts; n_classes],
        }
    }

    fn context() -> SessionContext {
        let dataset =
            Dataset::from_reader(CSV.as_bytes(), "Frequency of Purchases", "Customer ID").unwrap();
        let classes: Vec<String> = dataset.class_labels().to_vec();
        let n = classes.len();

        let age_stats: Vec<(f64, f64)> = (0..n).map(|i| (20.0 + 10.0 * i as f64, 40.0)).collect();

        let model = ModelArtifact::NaiveBayes(NaiveBayesModel {
            classes,
            class_counts: vec![1.0; n],
            features: vec![
                FeatureModel {
                    name: "Age".into(),
                    likelihood: gaussian(&age_stats),
                },
                FeatureModel {
                    name: "Gender".into(),
                    likelihood: frequency(&[("Female", 3.0), ("Male", 2.0)], n),
                },
                FeatureModel {
                    name: "Category".into(),
                    likelihood: frequency(
                        &[("Accessories", 1.0), ("Clothing", 3.0), ("Footwear", 1.0)],
                        n,
                    ),
                },
            ],
        });
        SessionContext { model, dataset }
    }

    #[test]
    fn synthesizes_one_bound_prompt_per_feature_in_schema_order() {
        let ctx = context();
        let driver = ScriptedDriver::new(vec![Answer::Default, Answer::Default, Answer::Default]);

        let record = collect_record(&ctx, &driver).unwrap();

        let asked = driver.asked();
        assert_eq!(asked.len(), 3);
        assert_eq!(
            asked[0],
            AskedPrompt::Integer {
                title: "Select Age".into(),
                default: 44,
                min: 18,
                max: 70,
            }
        );
        assert_eq!(
            asked[1],
            AskedPrompt::Select {
                title: "Select Gender".into(),
                options: vec!["Female".into(), "Male".into()],
                default: 0,
            }
        );
        assert_eq!(
            asked[2],
            AskedPrompt::Select {
                title: "Select Category".into(),
                options: vec![
                    "Accessories".into(),
                    "Clothing".into(),
                    "Footwear".into()
                ],
                default: 0,
            }
        );

        let names: Vec<&str> = record.feature_names().collect();
        assert_eq!(names, vec!["Age", "Gender", "Category"]);
        assert_eq!(record.get("Age"), Some(&FeatureValue::Number(44)));
        assert_eq!(
            record.get("Gender"),
            Some(&FeatureValue::Category("Female".into()))
        );
    }

    #[test]
    fn predict_flow_renders_the_full_report() {
        let ctx = context();
        // Predict with defaults, then quit.
        let driver = ScriptedDriver::new(vec![
            Answer::Select(0),
            Answer::Default,
            Answer::Default,
            Answer::Default,
            Answer::Select(2),
        ]);

        let mut out = Vec::new();
        run(&ctx, &driver, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Predicted Frequency: "));
        assert!(text.contains("Confidence: "));
        for class in ctx.dataset.class_labels() {
            assert!(text.contains(class.as_str()), "missing row for {class}");
        }
        assert!(text.contains("Input Data Summary"));
        assert!(!text.contains("✗ Error"));
    }

    #[test]
    fn prediction_is_idempotent_for_identical_inputs() {
        let ctx = context();
        let answers = || {
            vec![
                Answer::Integer(30),
                Answer::Select(1),
                Answer::Select(1),
            ]
        };

        let first = collect_record(&ctx, &ScriptedDriver::new(answers())).unwrap();
        let second = collect_record(&ctx, &ScriptedDriver::new(answers())).unwrap();
        assert_eq!(first, second);

        let p1 = ctx.model.class_probabilities(&first).unwrap();
        let p2 = ctx.model.class_probabilities(&second).unwrap();
        assert_eq!(p1, p2);
        let total: f64 = p1.iter().sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn failed_prediction_shows_a_banner_and_keeps_the_menu_alive() {
        let mut ctx = context();
        // Model fit on a feature the dataset no longer provides.
        if let ModelArtifact::NaiveBayes(m) = &mut ctx.model {
            m.features[0].name = "Income".into();
        }
        let driver = ScriptedDriver::new(vec![
            Answer::Select(0),
            Answer::Default,
            Answer::Default,
            Answer::Default,
            Answer::Select(2),
        ]);

        let mut out = Vec::new();
        run(&ctx, &driver, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("✗ Error"));
        assert!(text.contains("Income"));
        assert!(!text.contains("Predicted Frequency"));
    }

    #[test]
    fn about_action_writes_the_help_panel() {
        let ctx = context();
        let driver = ScriptedDriver::new(vec![Answer::Select(1), Answer::Select(2)]);

        let mut out = Vec::new();
        run(&ctx, &driver, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("About This App"));
        assert!(text.contains("Quarterly"));
    }

    #[test]
    fn zero_width_numeric_range_still_prompts() {
        let csv = "\
Customer ID,Age,Frequency of Purchases
1,40,Weekly
2,40,Annual
";
        let dataset =
            Dataset::from_reader(csv.as_bytes(), "Frequency of Purchases", "Customer ID").unwrap();
        let model = ModelArtifact::NaiveBayes(NaiveBayesModel {
            classes: dataset.class_labels().to_vec(),
            class_counts: vec![1.0, 1.0],
            features: vec![FeatureModel {
                name: "Age".into(),
                likelihood: gaussian(&[(40.0, 1.0), (40.0, 1.0)]),
            }],
        });
        let ctx = SessionContext { model, dataset };

        let driver = ScriptedDriver::new(vec![Answer::Default]);
        let record = collect_record(&ctx, &driver).unwrap();
        assert_eq!(
            driver.asked()[0],
            AskedPrompt::Integer {
                title: "Select Age".into(),
                default: 40,
                min: 40,
                max: 40,
            }
        );
        assert_eq!(record.get("Age"), Some(&FeatureValue::Number(40)));
    }

    #[test]
    fn menu_lists_all_actions_with_labels() {
        let items = menu_items();
        assert_eq!(items.len(), 3);
        assert!(items[0].contains("Predict purchase frequency"));
        assert!(items[1].contains("About this app"));
        assert!(items[2].contains("Quit"));
    }
}
