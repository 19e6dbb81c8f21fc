use web_runtime::cookie::{Processor, ProcessorConfig, RequestCookies};
use web_session::{IncomingSession, SessionConfig, SessionId};

fn parse(header: &str) -> RequestCookies<'_> {
    let processor = Processor::from(ProcessorConfig::default());
    let mut cookies = RequestCookies::new();
    cookies.extend_from_header(header, &processor).unwrap();
    cookies
}

#[test]
fn the_session_id_is_read_from_the_session_cookie() {
    let config = SessionConfig::default();
    let id = SessionId::random();
    let header = format!("theme=dark; id={id}");

    let incoming = IncomingSession::extract(&parse(&header), &config.cookie).unwrap();
    assert_eq!(incoming.id(), id);
}

#[test]
fn a_missing_cookie_means_no_session() {
    let config = SessionConfig::default();
    assert!(IncomingSession::extract(&parse("theme=dark"), &config.cookie).is_none());
}

#[test]
fn an_invalid_session_id_means_no_session() {
    let config = SessionConfig::default();
    let cookies = parse("id=definitely-not-a-uuid");
    assert!(IncomingSession::extract(&cookies, &config.cookie).is_none());
}

#[test]
fn a_custom_cookie_name_is_honoured() {
    let mut config = SessionConfig::default();
    config.cookie.name = "session".into();
    let id = SessionId::random();

    let header = format!("id=ignored; session={id}");
    let incoming = IncomingSession::extract(&parse(&header), &config.cookie).unwrap();
    assert_eq!(incoming.id(), id);
}
