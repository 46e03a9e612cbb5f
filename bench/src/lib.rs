// This crate only exists to hold the benchmark suite in src/bench.rs.
