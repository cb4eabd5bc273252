use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use fmxml_http::HostConnection;

/// What the one-shot server saw
#[allow(dead_code)]
#[derive(Debug)]
pub struct CapturedRequest {
    pub request_line: String,
    pub headers: Vec<String>,
}

#[allow(dead_code)]
impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        let prefix = format!("{}:", name.to_ascii_lowercase());
        self.headers
            .iter()
            .find(|h| h.to_ascii_lowercase().starts_with(&prefix))
            .map(|h| h[prefix.len()..].trim())
    }
}

/// Serve exactly one HTTP response on a random local port
///
/// Returns a connection pointing at the server and a receiver for the
/// request it handled.
#[allow(dead_code)]
pub fn serve_once(status_line: &str, body: &str) -> (HostConnection, Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/xml;charset=UTF-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        let mut headers = Vec::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end().to_string();
            if line.is_empty() {
                break;
            }
            headers.push(line);
        }

        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        tx.send(CapturedRequest {
            request_line: request_line.trim_end().to_string(),
            headers,
        })
        .ok();
    });

    let connection = HostConnection {
        hostname: "127.0.0.1".to_string(),
        database: "contacts".to_string(),
        port,
        ..HostConnection::default()
    };
    (connection, rx)
}

/// A successful result set with two people records
#[allow(dead_code)]
pub const TWO_PEOPLE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!DOCTYPE fmresultset PUBLIC "-//FMI//DTD fmresultset//EN" "/fmi/xml/fmresultset.dtd">
<fmresultset xmlns="http://www.filemaker.com/xml/fmresultset" version="1.0">
  <error code="0"/>
  <product build="01/01/2016" name="FileMaker Web Publishing Engine" version="14.0.4.412"/>
  <datasource database="contacts" date-format="MM/dd/yyyy" layout="people" table="People" time-format="HH:mm:ss" timestamp-format="MM/dd/yyyy HH:mm:ss" total-count="57"/>
  <metadata>
    <field-definition auto-enter="no" four-digit-year="no" global="no" max-repeat="1" name="FirstName" not-empty="no" numeric-only="no" result="text" time-of-day="no" type="normal"/>
    <field-definition auto-enter="no" four-digit-year="no" global="no" max-repeat="2" name="Phone" not-empty="no" numeric-only="no" result="text" time-of-day="no" type="normal"/>
    <relatedset-definition table="Notes">
      <field-definition auto-enter="no" four-digit-year="no" global="no" max-repeat="1" name="Notes::Body" not-empty="no" numeric-only="no" result="text" time-of-day="no" type="normal"/>
    </relatedset-definition>
  </metadata>
  <resultset count="2" fetch-size="2">
    <record mod-id="3" record-id="14">
      <field name="FirstName"><data>Ann &amp; Co</data></field>
      <field name="Phone"><data>555-0100</data><data>555-0199</data></field>
      <relatedset count="1" table="Notes">
        <record mod-id="1" record-id="900">
          <field name="Notes::Body"><data>portal row</data></field>
        </record>
      </relatedset>
    </record>
    <record mod-id="0" record-id="15">
      <field name="FirstName"><data><![CDATA[Bob <Jr>]]></data></field>
      <field name="Phone"><data/></field>
      <relatedset count="0" table="Notes"/>
    </record>
  </resultset>
</fmresultset>"#;
