pub mod har_fixture;
