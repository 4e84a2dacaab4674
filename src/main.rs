use aws_subnet_planner::aws::read_zone_cache;
use aws_subnet_planner::build_provision_plan;
use aws_subnet_planner::config::PlannerConfig;
use aws_subnet_planner::output::{plan_print, write_plan_file};
use log4rs;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let config = PlannerConfig::from_env()?;
    let zones = read_zone_cache(None, &config.region)?;

    let plan = build_provision_plan(&config, &zones)?;
    plan_print(&plan)?;

    let path = write_plan_file(&plan, None)?;
    log::info!("#End main() plan at {path}");

    Ok(())
}
