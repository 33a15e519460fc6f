//! HTML pages. Every interpolated value goes through `html_escape`.

use std::fmt::Write;

use axum::response::Html;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::types::{Album, Artist, ArtistOverview, Track};

/// Data shown on `/index`.
#[derive(Debug, Default)]
pub struct IndexPage {
    pub user: String,
    pub overview: Option<ArtistOverview>,
    pub trending: Vec<Artist>,
    pub recommendations: Vec<Artist>,
    pub messages: Vec<String>,
}

/// Data shown on `/recommend`.
#[derive(Debug, Default)]
pub struct RecommendPage {
    pub user: String,
    pub seeds: Vec<String>,
    pub recommendations: Vec<Artist>,
    pub messages: Vec<String>,
}

const STYLE: &str = "body{font-family:sans-serif;max-width:60rem;margin:2rem auto;padding:0 1rem}\
img{border-radius:4px}ul.cards{list-style:none;padding:0;display:flex;flex-wrap:wrap;gap:1rem}\
ul.cards li{width:10rem}.msg{color:#b00}";

fn layout(title: &str, user: Option<&str>, body: &str) -> Html<String> {
    let nav = match user {
        Some(user) => format!(
            "<nav>Signed in as <b>{}</b> | <a href=\"/index\">Search</a> | \
             <a href=\"/recommend\">Recommend</a> | <a href=\"/logout\">Log out</a></nav>",
            text(user)
        ),
        None => "<nav><a href=\"/login\">Log in</a> | <a href=\"/signup\">Sign up</a></nav>"
            .to_string(),
    };

    Html(format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{title}</title>\
         <style>{STYLE}</style></head><body>{nav}<h1>{title}</h1>{body}</body></html>",
        title = text(title),
    ))
}

pub fn welcome() -> Html<String> {
    layout(
        "Sporlweb",
        None,
        "<p>Search artists, browse their albums and singles, \
         see who is trending and discover related artists.</p>",
    )
}

pub fn message(title: &str, msg: &str) -> Html<String> {
    layout(title, None, &format!("<p class=\"msg\">{}</p>", text(msg)))
}

fn credentials_form(action: &str, button: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\
         <label>Username <input name=\"username\" required></label> \
         <label>Password <input name=\"password\" type=\"password\" required></label> \
         <button type=\"submit\">{button}</button></form>"
    )
}

pub fn signup() -> Html<String> {
    let body = credentials_form("/signup", "Sign up")
        + "<p>Already registered? <a href=\"/login\">Log in</a></p>";
    layout("Sign up", None, &body)
}

pub fn login() -> Html<String> {
    let body = credentials_form("/login", "Log in")
        + "<p>No account yet? <a href=\"/signup\">Sign up</a></p>";
    layout("Log in", None, &body)
}

fn messages(out: &mut String, messages: &[String]) {
    for msg in messages {
        let _ = write!(out, "<p class=\"msg\">{}</p>", text(msg));
    }
}

fn image_url(images: &[crate::types::Image]) -> Option<&str> {
    images.first().map(|i| i.url.as_str())
}

fn artist_cards(out: &mut String, heading: &str, artists: &[Artist], with_seed: bool) {
    let _ = write!(out, "<h2>{}</h2>", text(heading));
    if artists.is_empty() {
        out.push_str("<p>Nothing to show.</p>");
        return;
    }

    out.push_str("<ul class=\"cards\">");
    for artist in artists {
        out.push_str("<li>");
        if let Some(url) = image_url(&artist.images) {
            let _ = write!(out, "<img src=\"{}\" width=\"160\" alt=\"\"><br>", attr(url));
        }
        let _ = write!(
            out,
            "<b>{}</b><br>{} followers",
            text(&artist.name),
            artist.followers.total
        );
        if with_seed {
            let _ = write!(
                out,
                "<br><label><input type=\"checkbox\" name=\"seed_artist\" value=\"{}\"> seed</label>",
                attr(&artist.id)
            );
        }
        out.push_str("</li>");
    }
    out.push_str("</ul>");
}

fn tracks(out: &mut String, tracks: &[Track]) {
    out.push_str("<h2>Top tracks</h2><ol>");
    for track in tracks {
        match &track.external_urls.spotify {
            Some(url) => {
                let _ = write!(
                    out,
                    "<li><a href=\"{}\">{}</a></li>",
                    attr(url),
                    text(&track.name)
                );
            }
            None => {
                let _ = write!(out, "<li>{}</li>", text(&track.name));
            }
        }
    }
    out.push_str("</ol>");
}

fn releases(out: &mut String, heading: &str, releases: &[Album]) {
    let _ = write!(out, "<h2>{} ({})</h2>", text(heading), releases.len());
    if releases.is_empty() {
        out.push_str("<p>None.</p>");
        return;
    }

    out.push_str("<ul class=\"cards\">");
    for album in releases {
        out.push_str("<li>");
        if let Some(url) = image_url(&album.images) {
            let _ = write!(out, "<img src=\"{}\" width=\"160\" alt=\"\"><br>", attr(url));
        }
        let _ = write!(
            out,
            "<b>{}</b><br>{}<br>{} · {} tracks",
            text(&album.name),
            text(&album.artist_names()),
            text(&album.release_date),
            album.total_tracks
        );
        out.push_str("</li>");
    }
    out.push_str("</ul>");
}

fn overview(out: &mut String, overview: &ArtistOverview) {
    let artist = &overview.artist;
    let _ = write!(out, "<section><h2>{}</h2>", text(&artist.name));
    if let Some(url) = image_url(&artist.images) {
        let _ = write!(out, "<img src=\"{}\" width=\"240\" alt=\"\">", attr(url));
    }
    let _ = write!(
        out,
        "<p>Followers: {}<br>Popularity: {}<br>Genres: {}</p>",
        artist.followers.total,
        artist.popularity,
        text(&artist.genres.join(", "))
    );
    if let Some(url) = &artist.external_urls.spotify {
        let _ = write!(out, "<p><a href=\"{}\">Open in Spotify</a></p>", attr(url));
    }

    tracks(out, &overview.top_tracks);
    releases(out, "Albums", &overview.albums);
    releases(out, "Singles", &overview.singles);
    out.push_str("</section>");
}

const SEARCH_FORM: &str = "<form method=\"post\" action=\"/index\">\
    <label>Artist <input name=\"artist_name\" placeholder=\"Artist name\"></label> \
    <details><summary>More seed artists for recommendations</summary>\
    <input name=\"artist1_id\" placeholder=\"Artist id\"> \
    <input name=\"artist2_id\" placeholder=\"Artist id\"> \
    <input name=\"artist3_id\" placeholder=\"Artist id\"></details>\
    <button type=\"submit\">Search</button></form>";

pub fn index(page: &IndexPage) -> Html<String> {
    let mut body = String::from(SEARCH_FORM);
    messages(&mut body, &page.messages);

    if let Some(o) = &page.overview {
        overview(&mut body, o);
    }
    if !page.recommendations.is_empty() {
        artist_cards(&mut body, "Recommended for you", &page.recommendations, false);
    }

    body.push_str("<form method=\"post\" action=\"/recommend\">");
    artist_cards(&mut body, "Trending artists", &page.trending, true);
    if !page.trending.is_empty() {
        body.push_str("<button type=\"submit\">Recommend from selected</button>");
    }
    body.push_str("</form>");

    layout("Discover", Some(&page.user), &body)
}

pub fn recommend(page: &RecommendPage) -> Html<String> {
    let mut body = String::new();
    messages(&mut body, &page.messages);

    if page.seeds.is_empty() {
        body.push_str(
            "<p>Select seed artists on the <a href=\"/index\">search page</a> to get recommendations.</p>",
        );
    } else {
        artist_cards(&mut body, "Recommended artists", &page.recommendations, false);
    }

    layout("Recommendations", Some(&page.user), &body)
}
