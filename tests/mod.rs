
// This file organizes the integration tests into a cohesive test suite.
// Each module tests a specific aspect of the application:
// - ctftime_server: The CTFtime actor against a loopback HTTP server
// - smoke_tests: Basic wiring of config, commands and shared context
// - sync_flow: The synchronizer against mocked event source and calendar
