//
// Copyright (c) 2026 winln-rs contributors
//
// This file is part of the winln-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use std::path::{Component, Path, PathBuf};
use std::{env, fs, io};
use wgetopt::{Opt, OptParser, ParsedOpt};
use wlib::PROJECT_NAME;

const PROG: &str = "wln";

const OPTS: &[Opt] = &[
    Opt::new("force", 'f', false),
    Opt::new("symbolic", 's', false),
    Opt::new("junction", 'j', false),
    Opt::new("relative", 'r', false),
    Opt::new("help", 'h', false),
];

#[derive(Debug, Default)]
struct Args {
    force: bool,
    symbolic: bool,
    junction: bool,
    relative: bool,
}

fn usage() -> ! {
    eprintln!(
        "{}",
        gettext(
            "Usage: wln [option]... <target> <link>\n\
             \n\
             \x20 -s, --symbolic     create symbolic links instead of hard links\n\
             \x20 -j, --junction     create a Windows directory junction instead of a hard link\n\
             \x20                    -s and -j are mutually exclusive\n\
             \n\
             \x20 -r, --relative     create symbolic links relative to link location\n\
             \x20 -f, --force        remove existing destination files\n\
             \x20 -h, --help         display this help"
        )
    );
    std::process::exit(0);
}

fn argument_error(msg: &str) -> ! {
    eprintln!("{}: {}", PROG, msg);
    eprintln!("{}", gettext("Try 'wln --help' for more information."));
    std::process::exit(1);
}

fn parse_args() -> (Args, PathBuf, PathBuf) {
    let mut parser = OptParser::new(env::args().collect(), OPTS);
    let mut args = Args::default();

    loop {
        match parser.next_opt() {
            ParsedOpt::Opt { code, .. } => match code {
                'f' => args.force = true,
                's' => args.symbolic = true,
                'j' => args.junction = true,
                'r' => args.relative = true,
                'h' => usage(),
                _ => unreachable!(),
            },
            ParsedOpt::Unknown { token } => {
                argument_error(&format!("{} '{}'", gettext("unrecognized option"), token))
            }
            ParsedOpt::Done => break,
        }
    }

    if args.symbolic && args.junction {
        argument_error(&gettext(
            "cannot do --symbolic and --junction at the same time",
        ));
    }
    if args.relative && !args.symbolic {
        argument_error(&gettext("cannot do --relative without --symbolic"));
    }

    let operands = parser.positionals();
    if operands.len() < 2 {
        argument_error(&gettext("missing file operand"));
    }

    if args.junction {
        argument_error(&gettext("junctions aren't supported"));
    }

    // Operands past <target> and <link> are ignored.
    let target = PathBuf::from(&operands[0]);
    let linkname = PathBuf::from(&operands[1]);
    (args, target, linkname)
}

fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

/// Lexically re-express `target` relative to the directory `start`. Both
/// paths must be absolute. Falls back to `target` itself when the two share
/// no root at all (separate drives on Windows).
fn relative_path(target: &Path, start: &Path) -> PathBuf {
    let t: Vec<Component> = target.components().collect();
    let s: Vec<Component> = start.components().collect();

    let mut common = 0;
    while common < t.len() && common < s.len() && t[common] == s[common] {
        common += 1;
    }
    if common == 0 {
        return target.to_path_buf();
    }

    let mut rel = PathBuf::new();
    for _ in common..s.len() {
        rel.push("..");
    }
    for comp in &t[common..] {
        rel.push(comp.as_os_str());
    }
    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    rel
}

#[cfg(unix)]
fn make_symlink(link_text: &Path, linkname: &Path, _target_is_dir: bool) -> io::Result<()> {
    std::os::unix::fs::symlink(link_text, linkname)
}

#[cfg(windows)]
fn make_symlink(link_text: &Path, linkname: &Path, target_is_dir: bool) -> io::Result<()> {
    if target_is_dir {
        std::os::windows::fs::symlink_dir(link_text, linkname)
    } else {
        std::os::windows::fs::symlink_file(link_text, linkname)
    }
}

fn annotate(path: &Path, what: &str, e: io::Error) -> io::Error {
    io::Error::new(e.kind(), format!("{} '{}': {}", what, path.display(), e))
}

fn make_link(args: &Args, target: &Path, linkname: &Path) -> io::Result<()> {
    // The target must exist before anything is created or removed.
    let target_md = fs::metadata(target)
        .map_err(|e| annotate(target, &gettext("failed to read attributes for"), e))?;

    match fs::symlink_metadata(linkname) {
        Ok(_) if args.force => fs::remove_file(linkname)
            .map_err(|e| annotate(linkname, &gettext("failed to delete"), e))?,
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(annotate(linkname, &gettext("failed to read attributes for"), e)),
    }

    if args.symbolic {
        let link_text = if args.relative {
            let abs_target = absolutize(target)?;
            let abs_link = absolutize(linkname)?;
            let start = abs_link.parent().unwrap_or(Path::new("."));
            relative_path(&abs_target, start)
        } else {
            target.to_path_buf()
        };
        make_symlink(&link_text, linkname, target_md.is_dir())
            .map_err(|e| annotate(linkname, &gettext("failed to create symbolic link"), e))
    } else {
        fs::hard_link(target, linkname)
            .map_err(|e| annotate(linkname, &gettext("failed to create hard link"), e))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;

    let (args, target, linkname) = parse_args();

    if let Err(e) = make_link(&args, &target, &linkname) {
        eprintln!("{}: {}", PROG, e);
        std::process::exit(1);
    }

    Ok(())
}
