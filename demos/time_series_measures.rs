// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use infodynamics::estimators::traits::{GlobalValue, LocalValues};
use infodynamics::estimators::{ActiveInformation, BlockEntropy, EntropyRate, TransferEntropy};
use infodynamics::{InfoResult, api};

fn main() -> InfoResult<()> {
    // A binary series with a period-5 pattern
    let series = vec![0u32, 0, 1, 1, 1, 0, 0, 1, 1, 1];

    let storage = ActiveInformation::new(series.clone(), 2)?;
    let rate = EntropyRate::new(series.clone(), 2)?;
    let blocks = BlockEntropy::new(series.clone(), 2)?;

    println!("Series: {series:?}");
    println!("Active information (k=2): {}", storage.global_value()?);
    println!("  local: {}", storage.local_values()?);
    println!("Entropy rate (k=2): {}", rate.global_value()?);
    println!("Block entropy (k=2): {}", blocks.global_value()?);

    // Source drives the target with a one-step delay
    let source = vec![0u32, 1, 1, 1, 1, 0, 0, 0, 1];
    let target = vec![0u32, 0, 1, 1, 1, 1, 0, 0, 0];
    let forward = TransferEntropy::new(source.clone(), target.clone(), 1)?;
    let backward = TransferEntropy::new(target, source, 1)?;
    println!("Transfer entropy source -> target: {}", forward.global_value()?);
    println!("Transfer entropy target -> source: {}", backward.global_value()?);
    println!("  local (source -> target): {}", forward.local_values()?);

    // The same measures in a single call, here in nats
    let ensemble = vec![vec![1u32, 1, 0, 0, 1, 0, 0, 1], vec![0, 0, 0, 1, 0, 0, 0, 1]];
    let pooled = api::active_info(ensemble.clone(), 2, 0, 2.0, false)?;
    println!("Pooled active information of {} realizations: {:?}", ensemble.len(), pooled.global());
    let nats = ActiveInformation::new(ensemble, 2)?.log_base(std::f64::consts::E);
    println!("  in nats: {}", nats.global_value()?);

    Ok(())
}
