// tests/fetch_local.rs
//
// Full run against a one-shot loopback HTTP server.
//
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use uni_scrape::cli;
use uni_scrape::config::Params;
use uni_scrape::csv::LINE_END;
use uni_scrape::progress::Progress;
use uni_scrape::{runner, Error};

/// Serve exactly one response; returns the base URL and the request line seen.
fn serve_once(status: &str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/wiki/list", listener.local_addr().unwrap());
    let status = status.to_string();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        let mut headers = String::new();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" { break; }
            headers.push_str(&line);
        }

        let resp = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/html; charset=ISO-8859-1\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(resp.as_bytes()).unwrap();
        stream.flush().unwrap();
        request_line + &headers
    });

    (url, handle)
}

#[derive(Default)]
struct Recorder {
    done: Vec<usize>,
    finished: bool,
}

impl Progress for Recorder {
    fn item_done(&mut self, stage: usize) { self.done.push(stage); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn run_fetches_extracts_and_writes() {
    let (url, server) = serve_once(
        "200 OK",
        "<ul><li><a>東京大学 本部</a></li><li><a>京都大学</a></li><li><a>京都大学 附属</a></li></ul>",
    );
    let dir = tempfile::tempdir().unwrap();
    let params = Params { source_url: url, out: dir.path().join("universities.csv") };
    let mut rec = Recorder::default();

    let summary = runner::run(&params, Some(&mut rec)).unwrap();
    let seen = server.join().unwrap();

    assert!(seen.starts_with("GET /wiki/list "));
    assert!(seen.to_ascii_lowercase().contains("user-agent: uni_scrape/"));

    // body decoded as UTF-8 regardless of the declared charset
    let text = fs::read_to_string(&params.out).unwrap();
    let mut expected = vec!["京都大学", "東京大学"];
    expected.sort();
    assert_eq!(text, format!("University Name{LINE_END}{}{LINE_END}{}{LINE_END}", expected[0], expected[1]));

    assert_eq!(summary.count, 2);
    assert_eq!(rec.done, vec![0, 1, 2, 3]);
    assert!(rec.finished);
}

#[test]
fn non_success_status_is_an_error_and_writes_nothing() {
    let (url, server) = serve_once("404 Not Found", "gone");
    let dir = tempfile::tempdir().unwrap();
    let params = Params { source_url: url, out: dir.path().join("universities.csv") };

    let err = runner::run(&params, None).unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, Error::Status { status: 404, .. }));
    assert!(!params.out.exists());
}

#[test]
fn connection_refused_is_an_http_error() {
    // bind then drop to get a port nobody listens on
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let dir = tempfile::tempdir().unwrap();
    let params = Params {
        source_url: format!("http://127.0.0.1:{port}/"),
        out: dir.path().join("universities.csv"),
    };

    assert!(matches!(runner::run(&params, None), Err(Error::Http(_))));
}

#[test]
fn cli_prints_exactly_one_count_line() {
    let (url, server) = serve_once(
        "200 OK",
        "<ul><li><a>東京大学</a></li><li><a>京都大学</a></li><li><a>高専</a></li></ul>",
    );
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("universities.csv");
    let params = Params { source_url: url, out: out.clone() };

    let mut console = Vec::new();
    let summary = cli::run_to(params, &mut console).unwrap();
    server.join().unwrap();

    let console = String::from_utf8(console).unwrap();
    let lines: Vec<&str> = console.lines().collect();
    assert_eq!(lines, vec![format!("2 件の大学名を {} に保存しました。", out.display())]);

    // count on the console equals data rows in the file
    let data_rows = fs::read_to_string(&out).unwrap().lines().count() - 1;
    assert_eq!(summary.count, data_rows);
}
