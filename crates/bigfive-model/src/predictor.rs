//! Trait prediction over the pre-trained regression artifact.
//!
//! The artifact is a safetensors file holding a linear regression
//! head: `weights` [5 x 50] and `bias` [5], with output rows in
//! [`TraitName::ALL`] order. It is loaded once at startup; a failed
//! load is recorded and every later prediction fails fast rather than
//! attempting a reload.

use std::path::Path;

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;

use bigfive_core::{Error, Result, TraitScores, FEATURE_COUNT};

/// Number of regression outputs, one per trait.
const OUTPUT_COUNT: usize = 5;

/// Divisor applied to raw scores before the percentage conversion.
/// Raw scores live on the 1-5 instrument scale.
const SCORE_DIVISOR: f64 = 5.0;

/// Runs the regression artifact on feature vectors.
pub struct TraitPredictor {
    weights: Tensor,
    bias: Tensor,
    device: Device,
}

impl TraitPredictor {
    /// Load the artifact from a safetensors checkpoint.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let device = Device::Cpu;
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[path.as_ref()], DType::F32, &device)
                .map_err(|e| Error::ModelLoad(format!("{}: {e}", path.as_ref().display())))?
        };

        let weights = vb
            .get((OUTPUT_COUNT, FEATURE_COUNT), "weights")
            .map_err(|e| Error::ModelLoad(e.to_string()))?;
        let bias = vb
            .get(OUTPUT_COUNT, "bias")
            .map_err(|e| Error::ModelLoad(e.to_string()))?;

        tracing::info!(path = %path.as_ref().display(), "regression artifact loaded");

        Ok(Self {
            weights,
            bias,
            device,
        })
    }

    /// Build a predictor from raw weight/bias values. Used by the
    /// placeholder-artifact generator and by tests.
    pub fn from_weights(weights: Vec<f32>, bias: Vec<f32>) -> Result<Self> {
        if weights.len() != OUTPUT_COUNT * FEATURE_COUNT {
            return Err(Error::ModelLoad(format!(
                "expected {} weights, got {}",
                OUTPUT_COUNT * FEATURE_COUNT,
                weights.len()
            )));
        }
        if bias.len() != OUTPUT_COUNT {
            return Err(Error::ModelLoad(format!(
                "expected {OUTPUT_COUNT} bias terms, got {}",
                bias.len()
            )));
        }

        let device = Device::Cpu;
        let weights = Tensor::from_vec(weights, (OUTPUT_COUNT, FEATURE_COUNT), &device)
            .map_err(|e| Error::ModelLoad(e.to_string()))?;
        let bias = Tensor::from_vec(bias, OUTPUT_COUNT, &device)
            .map_err(|e| Error::ModelLoad(e.to_string()))?;

        Ok(Self {
            weights,
            bias,
            device,
        })
    }

    /// Predict trait percentages for one feature vector.
    ///
    /// Raw scores are converted as (raw / 5) * 100 and are NOT
    /// clamped; a regressor can step outside the nominal 0-100 range
    /// and that is passed through to the caller.
    pub fn predict(&self, features: &[f32]) -> Result<TraitScores> {
        if features.len() != FEATURE_COUNT {
            return Err(Error::Prediction(format!(
                "expected {FEATURE_COUNT} features, got {}",
                features.len()
            )));
        }

        let raw = self
            .infer(features)
            .map_err(|e| Error::Prediction(e.to_string()))?;

        let mut percentages = [0.0f64; OUTPUT_COUNT];
        for (slot, score) in percentages.iter_mut().zip(raw.iter()) {
            *slot = (f64::from(*score) / SCORE_DIVISOR) * 100.0;
        }

        Ok(TraitScores::new(percentages))
    }

    fn infer(&self, features: &[f32]) -> candle_core::Result<Vec<f32>> {
        let x = Tensor::from_vec(features.to_vec(), (FEATURE_COUNT, 1), &self.device)?;
        let raw = self.weights.matmul(&x)?.squeeze(1)?;
        let raw = (&raw + &self.bias)?;
        raw.to_vec1::<f32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigfive_core::TraitName;

    fn bias_only_predictor(bias: Vec<f32>) -> TraitPredictor {
        TraitPredictor::from_weights(vec![0.0; OUTPUT_COUNT * FEATURE_COUNT], bias).unwrap()
    }

    #[test]
    fn test_output_is_five_pairs_in_fixed_order() {
        let predictor = bias_only_predictor(vec![5.0, 4.0, 3.0, 2.0, 1.0]);
        let scores = predictor.predict(&[0.0; FEATURE_COUNT]).unwrap();

        let pairs = scores.pairs();
        assert_eq!(pairs.len(), 5);
        assert_eq!(pairs[0], (TraitName::Extraversion, 100.0));
        assert_eq!(pairs[1], (TraitName::Neuroticism, 80.0));
        assert_eq!(pairs[2], (TraitName::Agreeableness, 60.0));
        assert_eq!(pairs[3], (TraitName::Conscientiousness, 40.0));
        assert_eq!(pairs[4], (TraitName::Openness, 20.0));
    }

    #[test]
    fn test_out_of_range_scores_pass_through() {
        let predictor = bias_only_predictor(vec![6.0, -0.5, 2.5, 2.5, 2.5]);
        let scores = predictor.predict(&[3.0; FEATURE_COUNT]).unwrap();

        assert_eq!(scores.get(TraitName::Extraversion), 120.0);
        assert_eq!(scores.get(TraitName::Neuroticism), -10.0);
    }

    #[test]
    fn test_weighted_prediction() {
        // Each trait averages its own ten items.
        let mut weights = vec![0.0f32; OUTPUT_COUNT * FEATURE_COUNT];
        for trait_idx in 0..OUTPUT_COUNT {
            for item in 0..10 {
                weights[trait_idx * FEATURE_COUNT + trait_idx * 10 + item] = 0.1;
            }
        }
        let predictor = TraitPredictor::from_weights(weights, vec![0.0; OUTPUT_COUNT]).unwrap();

        let scores = predictor.predict(&[3.0; FEATURE_COUNT]).unwrap();
        for (_, pct) in scores.pairs() {
            assert!((pct - 60.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_shape_mismatch_is_prediction_error() {
        let predictor = bias_only_predictor(vec![0.0; OUTPUT_COUNT]);
        assert!(matches!(
            predictor.predict(&[3.0; 45]),
            Err(Error::Prediction(_))
        ));
    }

    #[test]
    fn test_from_weights_validates_shapes() {
        assert!(matches!(
            TraitPredictor::from_weights(vec![0.0; 10], vec![0.0; OUTPUT_COUNT]),
            Err(Error::ModelLoad(_))
        ));
        assert!(matches!(
            TraitPredictor::from_weights(vec![0.0; OUTPUT_COUNT * FEATURE_COUNT], vec![0.0; 3]),
            Err(Error::ModelLoad(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_model_load_error() {
        assert!(matches!(
            TraitPredictor::load("/nonexistent/model.safetensors"),
            Err(Error::ModelLoad(_))
        ));
    }
}
