use std::env;
use std::process;

use gopro_hero::{network::MacAddr, product::hero::GoProHero, proto::PrimaryMode};

use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn usage() -> ! {
    eprintln!(
        "usage: hero_demo <wake MAC | mode video|photo|multishot | set NAME VALUE | shutter | list | fetch>"
    );
    process::exit(2);
}

pub fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(cmd) = args.first() else { usage() };

    if cmd == "wake" {
        let mac: MacAddr = args.get(1).unwrap_or_else(|| usage()).parse().expect("parse mac");
        info!("waking {}", mac);
        if !gopro_hero::module::wake::wake(mac) {
            process::exit(1);
        }
        return;
    }

    let hero = GoProHero::from_env();
    info!("media listing: {:?}", hero.media_listing());

    match cmd.as_str() {
        "mode" => {
            let mode: PrimaryMode = args.get(1).unwrap_or_else(|| usage()).parse().expect("parse mode");
            hero.set_mode(mode);
            info!("mode: {}", hero.mode());
        }

        "set" => {
            let (Some(name), Some(value)) = (args.get(1), args.get(2)) else { usage() };
            let value: i32 = value.parse().expect("parse setting value");
            match hero.apply_setting(name, value) {
                Ok(sent) => info!("{} = {}, sent: {}", name, value, sent),
                Err(e) => {
                    error!("{}", e);
                    process::exit(1);
                }
            }
        }

        "shutter" => {
            let got = hero.trigger_shutter(false);
            info!("retrieved {} item(s)", got.len());
            for (i, m) in got.iter().enumerate() {
                if m.data.is_empty() {
                    warn!("item #{} is empty", i);
                } else {
                    info!("item #{}: {} bytes", i, m.data.len());
                }
            }
        }

        "list" => {
            for media in hero.list_media() {
                println!("{}", media);
            }
        }

        "fetch" => {
            let refs = hero.list_media();
            let items = hero.fetch_all(&refs, hero.config().fetch_timeout);
            for (media, data) in refs.iter().zip(items.iter()) {
                println!("{}\t{}", media, data.len());
            }
        }

        _ => usage(),
    }
}
