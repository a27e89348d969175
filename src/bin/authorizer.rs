pub use otp_relay::authorizer::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    otp_relay::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
