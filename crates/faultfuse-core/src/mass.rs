//! Basic probability assignments over the frame of discernment.
//!
//! Only singleton hypotheses and the universal set Θ carry mass; compound
//! subsets are not needed by any expert. The empty set never carries mass
//! in a stored function. Conflict only exists transiently inside combination.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::MASS_EPSILON;
use crate::errors::MassError;
use crate::frame::{FaultType, FrameOfDiscernment};

/// A validated mass function: non-negative masses summing to 1 within
/// [`MASS_EPSILON`].
///
/// Serialized as a map from hypothesis code to mass, with Θ under `unknown`.
///
/// # Examples
///
/// ```
/// use faultfuse_core::{FaultType, MassFunction};
///
/// // Ignorance is inferred when only singletons are supplied.
/// let m = MassFunction::new([(FaultType::BearingFault, 0.7)]).unwrap();
/// assert!((m.ignorance() - 0.3).abs() < 1e-12);
/// assert!((m.plausibility(FaultType::BearingFault) - 1.0).abs() < 1e-12);
///
/// // Singletons summing above 1 are rejected, not clamped.
/// assert!(MassFunction::new([
///     (FaultType::BearingFault, 0.7),
///     (FaultType::GearDamage, 0.6),
/// ]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<FaultType, f64>",
    into = "BTreeMap<FaultType, f64>"
)]
pub struct MassFunction {
    /// Positive masses on singleton hypotheses. Never contains `Unknown`.
    singletons: BTreeMap<FaultType, f64>,
    /// Mass on the universal hypothesis Θ.
    ignorance: f64,
}

impl MassFunction {
    /// Build a mass function from hypothesis/mass pairs.
    ///
    /// When no entry names [`FaultType::Unknown`], the universal mass is
    /// inferred as `1 - sum(singletons)`. Otherwise the supplied masses must
    /// already sum to 1.
    pub fn new<I>(entries: I) -> Result<Self, MassError>
    where
        I: IntoIterator<Item = (FaultType, f64)>,
    {
        let mut singletons = BTreeMap::new();
        let mut universal: Option<f64> = None;

        for (hypothesis, mass) in entries {
            check_mass(hypothesis, mass)?;
            let duplicate = if hypothesis.is_universal() {
                universal.replace(mass).is_some()
            } else {
                singletons.insert(hypothesis, mass).is_some()
            };
            if duplicate {
                return Err(MassError::DuplicateFocalElement {
                    hypothesis: hypothesis.code().to_string(),
                });
            }
        }

        let singleton_sum: f64 = singletons.values().sum();
        let ignorance = match universal {
            Some(mass) => {
                let sum = singleton_sum + mass;
                if (sum - 1.0).abs() > MASS_EPSILON {
                    return Err(MassError::NotNormalized { sum });
                }
                mass
            }
            None => {
                if singleton_sum > 1.0 + MASS_EPSILON {
                    return Err(MassError::SingletonOverflow { sum: singleton_sum });
                }
                (1.0 - singleton_sum).max(0.0)
            }
        };

        singletons.retain(|_, mass| *mass > 0.0);
        Ok(Self {
            singletons,
            ignorance,
        })
    }

    /// Build from hypothesis codes, rejecting codes outside Θ.
    pub fn from_codes(entries: &[(&str, f64)]) -> Result<Self, MassError> {
        let resolved = entries
            .iter()
            .map(|(code, mass)| FrameOfDiscernment::resolve(code).map(|h| (h, *mass)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(resolved)
    }

    /// Total ignorance: all mass on Θ. This is what an abstaining expert emits.
    pub fn vacuous() -> Self {
        Self {
            singletons: BTreeMap::new(),
            ignorance: 1.0,
        }
    }

    /// Simple support function: `support` on one hypothesis, the rest on Θ.
    pub fn simple_support(hypothesis: FaultType, support: f64) -> Result<Self, MassError> {
        Self::new([(hypothesis, support)])
    }

    /// Mass assigned to `hypothesis` (Θ when `hypothesis` is `Unknown`).
    pub fn mass(&self, hypothesis: FaultType) -> f64 {
        if hypothesis.is_universal() {
            self.ignorance
        } else {
            self.singletons.get(&hypothesis).copied().unwrap_or(0.0)
        }
    }

    /// Mass assigned to Θ.
    pub fn ignorance(&self) -> f64 {
        self.ignorance
    }

    /// Singleton focal elements in frame order.
    pub fn singletons(&self) -> impl Iterator<Item = (FaultType, f64)> + '_ {
        self.singletons.iter().map(|(h, m)| (*h, *m))
    }

    /// Number of focal elements, counting Θ when it carries mass.
    pub fn focal_count(&self) -> usize {
        self.singletons.len() + usize::from(self.ignorance > 0.0)
    }

    /// Sum of all masses.
    pub fn total(&self) -> f64 {
        self.singletons.values().sum::<f64>() + self.ignorance
    }

    /// Whether the function commits no mass to any singleton.
    pub fn is_vacuous(&self) -> bool {
        self.singletons.is_empty()
    }

    /// Bel(h). For a singleton this is its own mass; Bel(Θ) is 1.
    pub fn belief(&self, hypothesis: FaultType) -> f64 {
        if hypothesis.is_universal() {
            1.0
        } else {
            self.mass(hypothesis)
        }
    }

    /// Pl(h) = m(h) + m(Θ). Pl(Θ) is 1.
    pub fn plausibility(&self, hypothesis: FaultType) -> f64 {
        if hypothesis.is_universal() {
            1.0
        } else {
            self.mass(hypothesis) + self.ignorance
        }
    }

    /// Pignistic probability: m(h) plus an equal share of the ignorance.
    pub fn pignistic(&self, hypothesis: FaultType) -> f64 {
        if hypothesis.is_universal() {
            1.0
        } else {
            self.mass(hypothesis) + self.ignorance / FrameOfDiscernment::size() as f64
        }
    }

    /// The singleton with maximum mass. Ties resolve to the hypothesis that
    /// comes first in frame order. `None` when no singleton carries mass.
    pub fn argmax(&self) -> Option<(FaultType, f64)> {
        let mut best: Option<(FaultType, f64)> = None;
        for hypothesis in FrameOfDiscernment::SINGLETONS {
            let mass = self.mass(hypothesis);
            if mass <= 0.0 {
                continue;
            }
            match best {
                Some((_, best_mass)) if mass <= best_mass => {}
                _ => best = Some((hypothesis, mass)),
            }
        }
        best
    }

    /// Compare every hypothesis' mass within `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        FrameOfDiscernment::hypotheses()
            .all(|h| (self.mass(h) - other.mass(h)).abs() <= tolerance)
    }

    /// All masses keyed by hypothesis, Θ included under `Unknown`.
    pub fn to_map(&self) -> BTreeMap<FaultType, f64> {
        let mut map = self.singletons.clone();
        map.insert(FaultType::Unknown, self.ignorance);
        map
    }
}

impl Default for MassFunction {
    fn default() -> Self {
        Self::vacuous()
    }
}

impl TryFrom<BTreeMap<FaultType, f64>> for MassFunction {
    type Error = MassError;

    fn try_from(map: BTreeMap<FaultType, f64>) -> Result<Self, Self::Error> {
        Self::new(map)
    }
}

impl From<MassFunction> for BTreeMap<FaultType, f64> {
    fn from(m: MassFunction) -> Self {
        m.to_map()
    }
}

fn check_mass(hypothesis: FaultType, mass: f64) -> Result<(), MassError> {
    if !mass.is_finite() {
        return Err(MassError::NonFiniteMass {
            hypothesis: hypothesis.code().to_string(),
        });
    }
    if mass < 0.0 {
        return Err(MassError::NegativeMass {
            hypothesis: hypothesis.code().to_string(),
            mass,
        });
    }
    Ok(())
}
