use chordsheet::tonal::{Note, ScaleType};
use chordsheet::{diatonic_chords, session_from_json, transpose, Config, SessionRecord};
use std::env;
use std::fs;
use std::path::Path;
use std::process;

const USAGE: &str = "\
Usage: chordsheet [--config <file.yaml>] <command>

Commands:
  chords <root> <major|minor>              List the diatonic chords of a key
  transpose <chord> <semitones>            Transpose one chord name
  lock <lyrics.txt> [session.json]         Start a session from a lyrics file
  shift <session.json> <semitones> [out]   Transpose a whole session
  export <session.json> [output.txt]       Write the chord sheet text";

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}

fn usage() -> ! {
    fail(USAGE)
}

fn read(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => fail(format!("Error reading file '{}': {}", path, e)),
    }
}

fn write_or_print(output: Option<&String>, content: &str) {
    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, content) {
                fail(format!("Error writing to '{}': {}", path, e));
            }
            eprintln!("Wrote {}", path);
        }
        None => print!("{}", content),
    }
}

fn parse_semitones(arg: &str) -> i32 {
    arg.parse()
        .unwrap_or_else(|_| fail(format!("Invalid semitone count: {}", arg)))
}

fn record_json(record: &SessionRecord) -> String {
    match record.to_json() {
        Ok(json) => json + "\n",
        Err(e) => fail(e),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut config = Config::default();
    if args.first().map(String::as_str) == Some("--config") {
        if args.len() < 2 {
            usage();
        }
        config = Config::load(Path::new(&args[1])).unwrap_or_else(|e| fail(e));
        args.drain(..2);
    }

    let Some(command) = args.first() else {
        usage();
    };

    match (command.as_str(), &args[1..]) {
        ("chords", [root, scale_type]) => {
            let root: Note = root.parse().unwrap_or_else(|e| fail(e));
            let scale_type: ScaleType = scale_type.parse().unwrap_or_else(|e| fail(e));
            for (i, chord) in diatonic_chords(root, scale_type).iter().enumerate() {
                println!("{} {}", i + 1, chord);
            }
        }
        ("transpose", [chord, semitones]) => {
            println!("{}", transpose(chord, parse_semitones(semitones)));
        }
        ("lock", [lyrics, rest @ ..]) if rest.len() <= 1 => {
            let session = chordsheet::lock_lyrics(&read(lyrics), config.engine())
                .unwrap_or_else(|e| fail(e));
            write_or_print(rest.first(), &record_json(&SessionRecord::from_session(&session)));
        }
        ("shift", [session, semitones, rest @ ..]) if rest.len() <= 1 => {
            let mut session =
                session_from_json(&read(session), config.engine()).unwrap_or_else(|e| fail(e));
            session.transpose_all(parse_semitones(semitones));
            write_or_print(rest.first(), &record_json(&SessionRecord::from_session(&session)));
        }
        ("export", [session, rest @ ..]) if rest.len() <= 1 => {
            let session =
                session_from_json(&read(session), config.engine()).unwrap_or_else(|e| fail(e));
            write_or_print(rest.first(), &session.export());
        }
        _ => usage(),
    }
}
