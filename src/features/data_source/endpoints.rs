//! Translation between logical endpoints and the files that back them in
//! static mode.

use std::borrow::Cow;

pub const DEPUTY_DETAILS_FILE: &str = "deputados_detalhes.json";
pub const DEPUTIES_ENDPOINT: &str = "/deputados";

const DEPUTY_DETAILS_PREFIX: &str = "deputados";
const DEPUTY_DETAILS_SUFFIX: &str = "detalhes";

/// Several endpoints may share a file; order is the export order.
const ENDPOINT_FILES: &[(&str, &str)] = &[
    ("/deputados", "deputados.json"),
    ("/sessoes", "sessoes.json"),
    ("/estatisticas/sessoes", "estatisticas_sessoes.json"),
    ("/atividade/deputados", "atividades.json"),
    ("/atividade/agenda", "agenda.json"),
    ("/atividade/estatisticas", "atividades.json"),
    ("/substituicoes", "substituicoes.json"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaticRoute {
    File(&'static str),
    /// Percent-decoded deputy name to look up in [`DEPUTY_DETAILS_FILE`].
    DeputyDetails(String),
    Unmapped(String),
}

pub fn strip_query(endpoint: &str) -> &str {
    endpoint
        .split_once('?')
        .map(|(path, _)| path)
        .unwrap_or(endpoint)
}

pub fn static_file_for(endpoint: &str) -> Option<&'static str> {
    let path = strip_query(endpoint);
    ENDPOINT_FILES
        .iter()
        .find(|(mapped, _)| *mapped == path)
        .map(|(_, file)| *file)
}

pub fn resolve(endpoint: &str) -> StaticRoute {
    let path = strip_query(endpoint);

    if let Some(name) = deputy_details_name(path) {
        return StaticRoute::DeputyDetails(name);
    }

    match static_file_for(path) {
        Some(file) => StaticRoute::File(file),
        None => StaticRoute::Unmapped(path.to_string()),
    }
}

pub fn mapped_endpoints() -> impl Iterator<Item = (&'static str, &'static str)> {
    ENDPOINT_FILES.iter().copied()
}

pub fn api_url(base: &str, endpoint: &str) -> String {
    format!("{base}{endpoint}")
}

pub fn deputy_details_endpoint(name: &str) -> String {
    format!(
        "/{DEPUTY_DETAILS_PREFIX}/{}/{DEPUTY_DETAILS_SUFFIX}",
        urlencoding::encode(name)
    )
}

fn deputy_details_name(path: &str) -> Option<String> {
    let mut segments = path.split('/');

    let (Some(""), Some(DEPUTY_DETAILS_PREFIX), Some(raw_name), Some(DEPUTY_DETAILS_SUFFIX), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return None;
    };

    if raw_name.is_empty() {
        return None;
    }

    let name = urlencoding::decode(raw_name).unwrap_or(Cow::Borrowed(raw_name));
    Some(name.into_owned())
}
