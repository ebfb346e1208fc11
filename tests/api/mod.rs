mod health_tests;
mod job_application_tests;
mod lookup_tests;
