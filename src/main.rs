// A thin driver around the library: one background in, one labelled image out.
//
// Usage:
//   nut_synth <background> <output_image> <labels_file> <class_id>:<item_path> [...]
//
// Items without a `class_id:` prefix use NUT_SYNTH_CLASS_ID (default 0). ROIs come
// from NUT_SYNTH_ROIS as `col,row,w,h;col,row,w,h`, or the built-in conveyor set.

use anyhow::Context;
use log::info;
use nut_synth::core_modules::annotation;
use nut_synth::config::{ROIS_VAR, parse_item_arg, parse_rois};
use nut_synth::{Background, Item, Roi, SynthConfig};
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // --- 1. Argument Parsing & Setup ---
    let args: Vec<String> = env::args().collect();
    if args.len() < 5 {
        println!(
            "Usage: nut_synth <background> <output_image> <labels_file> <class_id>:<item> [...]"
        );
        return Ok(());
    }
    let background_path = &args[1];
    let output_path = &args[2];
    let labels_path = &args[3];
    let config = SynthConfig::from_env();

    let rois = match env::var(ROIS_VAR) {
        Ok(raw) => parse_rois(&raw).with_context(|| format!("parsing {ROIS_VAR}"))?,
        Err(_) => Roi::defaults(),
    };

    // --- 2. Background ---
    let mut background = Background::open(background_path, rois)
        .with_context(|| format!("opening background {background_path}"))?;

    // --- 3. Items, one insertion and one label each ---
    let mut rng = rand::thread_rng();
    for arg in &args[4..] {
        let (class_id, item_path) = parse_item_arg(arg, config.class_id)?;
        let item = Item::open(item_path).with_context(|| format!("opening item {item_path}"))?;

        let insertion = background
            .insert_item(&item, &config, &mut rng)
            .with_context(|| format!("inserting {item_path}"))?;
        let record = annotation::write_insertion(class_id, &insertion, labels_path)
            .with_context(|| format!("writing label to {labels_path}"))?;
        info!("placed {item_path} at {} as {record:?}", insertion.placement);
    }

    // --- 4. Output ---
    background
        .save(output_path)
        .with_context(|| format!("saving {output_path}"))?;

    println!("Inserted {} items. Output saved to {}", args.len() - 4, output_path);
    Ok(())
}
