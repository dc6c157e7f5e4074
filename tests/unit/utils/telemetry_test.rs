// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use jobpulse::utils::telemetry;

#[test]
fn test_telemetry_initialization_is_repeatable() {
    telemetry::init_telemetry();
    // A second call must not panic
    telemetry::init_telemetry();

    tracing::info!(records = 3, path = "vacancies.csv", "Loaded vacancies");
    tracing::warn!("CSV file missing");
}
