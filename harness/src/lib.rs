pub mod bench {
    pub mod config;
    pub mod platform;
    pub mod report;
    pub mod runner;
    pub mod scenario;
    pub mod stopwatch;
    pub mod types;
}
