// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod active_information;
pub mod entropy;
pub mod entropy_rate;
pub mod mutual_information;
pub mod series;
pub mod transfer_entropy;
pub mod traits;
pub mod utils;

pub use active_information::ActiveInformation;
pub use entropy::{BlockEntropy, ConditionalEntropy, RelativeEntropy};
pub use entropy_rate::EntropyRate;
pub use mutual_information::MutualInformation;
pub use series::{Series, SeriesData};
pub use traits::{GlobalValue, LocalValues, Measure};
pub use transfer_entropy::TransferEntropy;
