use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match donor_desk_api::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("donor-desk: {err}");
            ExitCode::FAILURE
        }
    }
}
