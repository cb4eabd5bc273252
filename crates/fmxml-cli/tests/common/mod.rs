use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Serve one XML response on a random local port
///
/// Returns the port and a receiver for the request line.
#[allow(dead_code)]
pub fn serve_once(body: &'static str) -> (u16, Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if line.trim_end().is_empty() {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        tx.send(request_line.trim_end().to_string()).ok();
    });

    (port, rx)
}

#[allow(dead_code)]
pub const ONE_PERSON: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<fmresultset xmlns="http://www.filemaker.com/xml/fmresultset" version="1.0">
  <error code="0"/>
  <datasource database="contacts" layout="people" table="People" total-count="1"/>
  <resultset count="1" fetch-size="1">
    <record mod-id="2" record-id="7">
      <field name="LastName"><data>Smith</data></field>
    </record>
  </resultset>
</fmresultset>"#;

#[allow(dead_code)]
pub const NO_RECORDS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<fmresultset xmlns="http://www.filemaker.com/xml/fmresultset" version="1.0">
  <error code="401"/>
  <datasource database="contacts" layout="people" table="People" total-count="12"/>
  <resultset count="0" fetch-size="0"/>
</fmresultset>"#;

#[allow(dead_code)]
pub const LAYOUT_MISSING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<fmresultset xmlns="http://www.filemaker.com/xml/fmresultset" version="1.0">
  <error code="105"/>
</fmresultset>"#;
