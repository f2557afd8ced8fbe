use crate::app_context;
use crate::cli::tests::fake_args;
use crate::http::router;
use crate::locations::tests::iceland_oracle;
use crate::scores::LoggingScoreStorage;
use axum_test::TestServer;
use std::sync::Arc;

pub fn test_server() -> TestServer {
    let args = fake_args();
    let app_context = app_context::init(iceland_oracle(), Arc::new(LoggingScoreStorage));
    let router = router::new(&args, app_context);
    TestServer::new(router).expect("Failed to run test server.")
}
