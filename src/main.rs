use clap::Parser;
use con_miner::{
    mine_once, CommandTipOracle, CommandValidator, MinerSettings, Opt, SledStore,
};
use log::{error, LevelFilter};
use std::process;

fn main() {
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let opt = Opt::parse();
    let settings = MinerSettings::from_opt(opt);

    if let Err(e) = run(&settings) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run(settings: &MinerSettings) -> con_miner::Result<()> {
    let store = SledStore::open(&settings.db_path())?;
    let oracle = CommandTipOracle::new(&settings.pick_command, settings.db_path());
    let validator = CommandValidator::new(&settings.valid_command, settings.con_path.clone());
    let config = settings.miner_config();

    let block = mine_once(&store, &store, Some(&oracle), &validator, &config)?;

    println!(
        "Successfully mined and published block with hash {}.",
        block.get_hash()
    );
    Ok(())
}
