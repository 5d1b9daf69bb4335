mod config;
mod constant;
mod dad_error;
mod devops;
mod download;
mod persist;
mod pretty_log;
mod template;

use crate::config::config_file::ConfigFile;
use crate::config::download_args::DownloadArgs;
use crate::config::DownloadConfig;
use crate::constant::log::EXIT_WITH_CODE;
use crate::dad_error::{DadError, DadExitCode};
use crate::devops::pat_devops_async_client::PatDevOpsAsyncClient;
use crate::download::{run_download, DownloadSummary};
use crate::pretty_log::{colored_println, ThemeColor};
use clap::Parser;
use formatx::formatx;
use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "DevOps Artifact Downloader",
  author,
  version,
  about(env!("CARGO_PKG_DESCRIPTION")),
  long_about = None
)]
struct Cli {
    #[command(flatten)]
    download_args: DownloadArgs,
}

#[tokio::main]
async fn main() -> ExitCode {
    dispatch(std::env::args_os(), &mut std::io::stdout())
        .await
        .into()
}

/// # dispatch
///
/// Parse `args`, run the download and decide the exit code. The only place
/// where errors turn into exit codes.
async fn dispatch<I, T, W>(args: I, out: &mut W) -> DadExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version land here too
            return if e.use_stderr() {
                DadExitCode::InvalidArguments
            } else {
                DadExitCode::Success
            };
        }
    };

    match main_cli(cli.download_args, out).await {
        Ok(_) => DadExitCode::Success,
        Err(err) => {
            err.colored_println(out);
            let exit_code = err.exit_code();
            colored_println(
                out,
                ThemeColor::Second,
                &formatx!(EXIT_WITH_CODE, exit_code, exit_code as u8).unwrap_or_default(),
            );
            exit_code
        }
    }
}

async fn main_cli<W: Write>(
    args: DownloadArgs,
    out: &mut W,
) -> Result<DownloadSummary, DadError> {
    let quiet = args.quiet;
    let file = ConfigFile::load(args.config.as_deref())?;
    let config = DownloadConfig::merge(args, file)?;

    let client = PatDevOpsAsyncClient::new(
        &config.organization_url(),
        &config.organization,
        &config.pat,
    )?;

    if quiet {
        run_download(&client, &config, &mut std::io::sink()).await
    } else {
        run_download(&client, &config, out).await
    }
}
