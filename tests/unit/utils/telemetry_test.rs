// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use actor_relay::utils::telemetry;

    #[test]
    fn test_telemetry_initialization_is_idempotent() {
        telemetry::init_telemetry();
        // Second call must not panic even though a subscriber is already set
        telemetry::init_telemetry();

        tracing::info!(
            run_id = "HG7ML7M8z78YcAPEB",
            dataset_id = "wmKPijuyDnPZAPRMk",
            items = 3,
            "Results fetched"
        );
    }
}
