//! Writes a placeholder regression artifact so the service can run
//! locally without the trained checkpoint. The placeholder simply
//! averages each trait's own ten items, so all-3 answers score 60%.

use std::collections::HashMap;
use std::env;

use bigfive_core::FEATURE_COUNT;
use candle_core::{Device, Tensor};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/model.safetensors".to_string());

    let mut weights = vec![0.0f32; 5 * FEATURE_COUNT];
    for trait_idx in 0..5 {
        for item in 0..10 {
            weights[trait_idx * FEATURE_COUNT + trait_idx * 10 + item] = 0.1;
        }
    }

    let device = Device::Cpu;
    let mut tensors = HashMap::new();
    tensors.insert(
        "weights".to_string(),
        Tensor::from_vec(weights, (5, FEATURE_COUNT), &device)?,
    );
    tensors.insert(
        "bias".to_string(),
        Tensor::from_vec(vec![0.0f32; 5], 5, &device)?,
    );

    candle_core::safetensors::save(&tensors, &path)?;
    println!("placeholder artifact written to {path}");
    Ok(())
}
