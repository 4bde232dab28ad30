use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::policy::Rules;
use crate::core::export::ExportLogic;
use crate::db::log::ttlog_or_warn;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let (pool, state) = super::open_state(cfg)?;
        let path = ExportLogic::export(&state, &Rules::from_config(cfg), format, file, *force)?;

        ttlog_or_warn(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Cycle exported as {}", format.as_str()),
        );
    }
    Ok(())
}
