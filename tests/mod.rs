
// This file organizes the integration tests into a cohesive test suite.
// Each module tests a specific aspect of the library:
// - round_trip: wire records to week slots and back
// - summary_tests: the read-only schedule summaries
// - commands_tests: the CLI commands run against files on disk
