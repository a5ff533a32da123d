/// Typed domain of one feature column, computed once when the dataset loads.
///
/// A column is numerical iff every non-empty cell parses as a finite float;
/// anything else makes it categorical. Numerical bounds are floored to
/// integers, matching how the model's training inputs were bounded.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureDomain {
    /// Distinct observed values, sorted ascending.
    Categorical { values: Vec<String> },
    /// Observed `[min, max]` range, floored.
    Numerical { min: i64, max: i64 },
}

impl FeatureDomain {
    /// Infer the domain from a column's raw cells. Empty cells are ignored;
    /// returns `None` when nothing usable remains.
    pub fn infer<S: AsRef<str>>(cells: &[S]) -> Option<FeatureDomain> {
        let cells: Vec<&str> = cells
            .iter()
            .map(|c| c.as_ref().trim())
            .filter(|c| !c.is_empty())
            .collect();
        if cells.is_empty() {
            return None;
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for cell in &cells {
            match cell.parse::<f64>() {
                Ok(x) if x.is_finite() => {
                    min = min.min(x);
                    max = max.max(x);
                }
                _ => {
                    let mut values: Vec<String> = cells.iter().map(|c| c.to_string()).collect();
                    values.sort();
                    values.dedup();
                    return Some(FeatureDomain::Categorical { values });
                }
            }
        }

        Some(FeatureDomain::Numerical {
            min: min.floor() as i64,
            max: max.floor() as i64,
        })
    }
}

/// A named feature column with its inferred domain.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureColumn {
    pub name: String,
    pub domain: FeatureDomain,
}
