mod config;
mod memory;
mod params;
mod replace;
mod workload;

use std::fs;
use std::io;

use log::debug;

use crate::config::Config;
use crate::memory::PageId;
use crate::params::DerivedParams;
use crate::workload::Workload;

fn main() {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    let config_str: Option<String> = if let Some(inline) = args.opt_value_from_str("--config").unwrap()
    {
        Some(inline)
    } else if let Some(config_path) = args.opt_value_from_str::<_, String>("-p").unwrap() {
        Some(fs::read_to_string(config_path).expect("Could not find config file"))
    } else {
        None
    };
    let config: Config = match config_str {
        Some(s) => serde_json::from_str(&s).unwrap(),
        None => Config::default(),
    };

    let stats_path: Option<String> = args.opt_value_from_str("--json").unwrap();

    let workload_path: Option<String> = args.opt_value_from_str("-t").unwrap();
    let workload = match workload_path {
        Some(path) => Workload::read(fs::File::open(path).expect("Could not open workload file")),
        None => Workload::read(io::stdin().lock()),
    }
    .expect("Could not read workload");

    // An incomplete header produces no output at all.
    let Some(workload) = workload else {
        debug!("workload header incomplete, nothing to simulate");
        return;
    };
    debug!("architecture label: {}", workload.arch);

    let params = DerivedParams::derive(workload.mem_size, workload.virt_size, workload.page_count);
    debug!(
        "page size {}, {} frames, minimum swap {}",
        params.page_size, params.num_frames, params.min_swap
    );

    println!("{}", params.page_size);
    println!("{}", params.num_frames);
    println!("{}", params.min_swap);
    println!("{}", workload.declared);

    let mut all_stats = Vec::new();
    for refs in &workload.sequences {
        println!("{}", join_pages(refs));
        for stats in config.run_policies(params.usable_frames(), refs) {
            println!("{}", stats.policy);
            println!("{}", stats.faults);
            println!("{}", stats.swap);
            debug!(
                "{}: {} faults, {} hits, {}us",
                stats.policy, stats.faults, stats.hits, stats.elapsed_us
            );
            all_stats.push(stats);
        }
    }

    if let Some(path) = stats_path {
        let stats_file = fs::File::create(path).expect("Cannot open output file");
        serde_json::to_writer_pretty(stats_file, &all_stats).unwrap();
    }
}

fn join_pages(refs: &[PageId]) -> String {
    refs.iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
