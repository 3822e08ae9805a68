use std::path::PathBuf;

use anyhow::Context;
use argh::FromArgs;
use log::info;

use sprig_collections::visualization::ToGraphviz;
use sprig_dirtree::{make_tree, DirTreeOptions};

/// Print a directory hierarchy as a box-drawing tree.
#[derive(FromArgs)]
struct Args {
    /// directory to walk
    #[argh(positional, default = "PathBuf::from(\".\")")]
    dir: PathBuf,

    /// directory name to skip, may be repeated
    #[argh(option, long = "ignore-dir")]
    ignore_dir: Vec<String>,

    /// file extension to skip (without the dot), may be repeated
    #[argh(option, long = "ignore-ext")]
    ignore_ext: Vec<String>,

    /// glob matched against entry names to skip, may be repeated
    #[argh(option)]
    ignore: Vec<String>,

    /// append '/' to directory names
    #[argh(switch, long = "mark-dirs")]
    mark_dirs: bool,

    /// also write the tree as a graphviz file
    #[argh(option)]
    dot: Option<PathBuf>,

    /// print the blake3 fingerprint of the tree
    #[argh(switch)]
    fingerprint: bool,

    /// print the height of the tree
    #[argh(switch)]
    height: bool,
}

impl Args {
    fn options(&self) -> anyhow::Result<DirTreeOptions> {
        let ignore_patterns = self
            .ignore
            .iter()
            .map(|pattern| {
                glob::Pattern::new(pattern).with_context(|| format!("invalid pattern {:?}", pattern))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(DirTreeOptions {
            ignore_directories: self.ignore_dir.clone(),
            ignore_extensions: self.ignore_ext.clone(),
            ignore_patterns,
            mark_directories: self.mark_dirs,
        })
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Args = argh::from_env();
    let options = args.options()?;
    let tree = make_tree(&args.dir, &options)?;
    info!("walked {} entries under {}", tree.len(), args.dir.display());

    println!("{}", tree);
    if args.height {
        println!("height: {}", tree.height());
    }
    if args.fingerprint {
        println!("fingerprint: {}", hex::encode(tree.fingerprint()?));
    }
    if let Some(path) = &args.dot {
        let label = args.dir.display().to_string();
        tree.to_graphviz(&label).save_file(path)?;
        info!("wrote {}", path.display());
    }
    Ok(())
}
