mod common;

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;

use odds_bands::error::DatasetError;
use odds_bands::loader::{Column, load_sources};
use odds_bands::sources::SourceLocation;

use common::fixture;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

/// Serves `/serie_b.csv` with the Serie B fixture and 404 for anything else.
fn spawn_csv_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
    let addr = listener.local_addr().expect("local addr");
    let body = read_fixture("serie_b_sample.csv");

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else {
                continue;
            };
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                continue;
            }
            loop {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    Ok(0) => break,
                    Ok(_) if line == "\r\n" || line == "\n" => break,
                    Ok(_) => {}
                    Err(_) => break,
                }
            }

            let path = request_line.split_whitespace().nth(1).unwrap_or("");
            let (status, payload) = if path == "/serie_b.csv" {
                ("200 OK", body.as_str())
            } else {
                ("404 Not Found", "not found")
            };
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{payload}",
                payload.len()
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{addr}")
}

#[test]
fn url_source_loads_csv() {
    let base = spawn_csv_server();
    let url = format!("{base}/serie_b.csv");
    let source = SourceLocation::parse(&url).expect("url source");
    assert!(matches!(source, SourceLocation::Url(_)));

    let table = load_sources(&[source]).expect("remote csv should load");
    assert_eq!(table.len(), 2);
    assert_eq!(table.sources()[0].name(), url);
    let homes: Vec<&str> = table.rows().map(|r| r.value(Column::HomeTeam)).collect();
    assert_eq!(homes, vec!["Parma", "Bari"]);
}

#[test]
fn non_success_status_is_load_error_naming_url() {
    let base = spawn_csv_server();
    let url = format!("{base}/missing.csv");
    let sources = vec![
        fixture("serie_a_sample.csv"),
        SourceLocation::Url(url.clone()),
    ];

    let err = load_sources(&sources).unwrap_err();
    match err {
        DatasetError::Load {
            source_name,
            reason,
        } => {
            assert_eq!(source_name, url);
            assert!(reason.contains("404"), "unexpected reason: {reason}");
        }
        other => panic!("expected load error, got {other:?}"),
    }
}
