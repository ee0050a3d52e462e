//! A small front end over the kinesis client.
//!
//! ```shell
//! cargo run --example kinesis_cli -- -L -k <secret> -i <key_id> -r us-east-1 -e kinesis.us-east-1.amazonaws.com
//! cargo run --example kinesis_cli -- -D ... -s my-stream
//! cargo run --example kinesis_cli -- -P ... -s my-stream -p pk-1 -x "hello"
//! cargo run --example kinesis_cli -- -P ... -s my-stream -p pk-1 -f record.bin
//! ```

use anyhow::{bail, Result};
use kinesign_core::Context;
use kinesign_http_send_reqwest::ReqwestHttpSend;
use kinesign_kinesis::{Client, Config};
use std::collections::HashMap;
use std::{env, fs, process};

const USAGE: &str = "\
Usage: kinesis_cli -L -k aws_key -i aws_key_id -r region -e endpoint [-t session_token]
       kinesis_cli -D -k aws_key -i aws_key_id -r region -e endpoint [-t session_token]
         -s stream_name
       kinesis_cli -P -k aws_key -i aws_key_id -r region -e endpoint [-t session_token]
         -s stream_name -p partition_key [-f filename] [-x text]

List Kinesis streams, describe a Kinesis stream or put data onto a Kinesis
stream from either a file or as text on the command line. Specify
a session_token if using temporary AWS credentials.
";

enum Command {
    List,
    Describe { stream: String },
    Put { stream: String, key: String, data: Vec<u8> },
}

fn usage() -> ! {
    eprint!("{USAGE}");
    process::exit(1)
}

fn parse_args() -> Result<(Config, Command)> {
    let mut action = None;
    let mut opts = HashMap::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-L" | "-D" | "-P" => action = Some(arg),
            "-k" | "-i" | "-t" | "-r" | "-e" | "-s" | "-f" | "-x" | "-p" => {
                let Some(value) = args.next() else { usage() };
                opts.insert(arg, value);
            }
            _ => usage(),
        }
    }

    let mut take = |name: &str| opts.remove(name);
    let config = Config {
        secret_access_key: take("-k"),
        access_key_id: take("-i"),
        session_token: take("-t"),
        region: take("-r"),
        endpoint: take("-e"),
        ..Default::default()
    };
    if config.secret_access_key.is_none()
        || config.access_key_id.is_none()
        || config.region.is_none()
        || config.endpoint.is_none()
    {
        usage()
    }

    let command = match action.as_deref() {
        Some("-L") => Command::List,
        Some("-D") => Command::Describe {
            stream: take("-s").unwrap_or_else(|| usage()),
        },
        Some("-P") => {
            let stream = take("-s").unwrap_or_else(|| usage());
            let key = take("-p").unwrap_or_else(|| usage());
            let data = match (take("-x"), take("-f")) {
                (Some(text), _) => text.into_bytes(),
                (None, Some(path)) => match fs::read(&path) {
                    Ok(data) => data,
                    Err(err) => bail!("cannot open file {path}: {err}"),
                },
                (None, None) => usage(),
            };
            Command::Put { stream, key, data }
        }
        _ => usage(),
    };

    Ok((config, command))
}

fn main() -> Result<()> {
    env_logger::init();

    let (config, command) = parse_args()?;

    let ctx = Context::new().with_http_send(ReqwestHttpSend::builder().build()?);
    let client = Client::new(ctx, &config)?;

    let resp = match command {
        Command::List => client.list_streams()?,
        Command::Describe { stream } => client.describe_stream(&stream)?,
        Command::Put { stream, key, data } => client.put_record(&stream, &key, &data)?,
    };

    eprintln!("{}", resp.report());
    if !resp.is_success() {
        process::exit(1);
    }
    Ok(())
}
