//! HTML rendering for the main page.
//!
//! Presentation only: the fact list wraps each fact in a delete form keyed
//! by its id, which is all the removal affordance needs.

use lifelog_core::{Fact, FactStore};

/// Escape text interpolated into HTML.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn delete_form(fact: &Fact) -> String {
    format!(
        "<form action=\"/delete\" method=\"POST\" class=\"delete-form\">\n\
         <input class=\"delete-uuid\" type=\"hidden\" name=\"uuid\" value=\"{}\" />\n\
         <input class=\"delete-button\" type=\"submit\" value=\"X\" />\n\
         </form>",
        fact.id()
    )
}

fn fact_item(fact: &Fact) -> String {
    format!(
        "<li>{}{}</li>\n",
        delete_form(fact),
        escape_html(&fact.to_string())
    )
}

/// The fact list as an unordered list, one removal affordance per fact.
pub fn fact_list(store: &FactStore) -> String {
    let items: String = store.facts().iter().map(fact_item).collect();
    format!("<ul>\n{}</ul>\n", items)
}

fn add_form() -> String {
    "<form id=\"add-form\" action=\"/add\" method=\"POST\">\n\
     <input class=\"add-line\" id=\"subject\" type=\"text\" name=\"subject\" placeholder=\"our hero\" required autocapitalize=\"none\" />\n\
     <input class=\"add-line\" id=\"verb\" type=\"text\" name=\"verb\" placeholder=\"awoke\" required autocapitalize=\"none\" />\n\
     <br />\n\
     <div id=\"mods\"></div>\n\
     <button type=\"button\" id=\"more-mods\">+</button>\n\
     <input class=\"add-line\" id=\"add\" type=\"submit\" value=\"Add\" />\n\
     </form>\n"
        .to_string()
}

/// The main page: add form plus the story so far.
pub fn main_page(store: &FactStore) -> String {
    format!(
        r#"<!DOCTYPE html><html>
<head>
<meta name="viewport" content="width=device-width" />
<title>lifelog</title>
<style>
body {{ font-family: monospace; max-width: 700px; margin: 0 auto; padding: 20px; }}
.add-line {{ margin: 2px; }}
.delete-form {{ display: inline; margin-right: 6px; }}
ul {{ list-style: none; padding-left: 0; }}
li {{ margin: 4px 0; }}
</style>
</head>
<body>
<p>Hallo!</p>
{add_form}
<p>Here's your life story up 'till now:</p>
{fact_list}
<script>
function modRow() {{
    var row = document.createElement('div');
    row.innerHTML = '<input class="add-line mod-tag" type="text" placeholder="at" />' +
                    '<input class="add-line mod-value" type="text" placeholder="7am" />';
    row.querySelector('.mod-value').addEventListener('blur', function (e) {{
        var input = e.target;
        fetch('/transform', {{
            method: 'POST',
            headers: {{'Content-Type': 'application/json'}},
            body: JSON.stringify({{id: 'mod', value: input.value}})
        }}).then(function (r) {{ return r.json(); }})
          .then(function (d) {{ input.value = d.value; }});
    }});
    document.getElementById('mods').appendChild(row);
}}
document.getElementById('more-mods').addEventListener('click', modRow);
modRow();

document.getElementById('add-form').addEventListener('submit', function (e) {{
    e.preventDefault();
    var mods = [];
    document.querySelectorAll('#mods div').forEach(function (row) {{
        var value = row.querySelector('.mod-value').value;
        if (value) {{
            mods.push({{tag: row.querySelector('.mod-tag').value, value: value}});
        }}
    }});
    fetch('/add', {{
        method: 'POST',
        headers: {{'Content-Type': 'application/json'}},
        body: JSON.stringify({{
            subject: document.getElementById('subject').value,
            verb: document.getElementById('verb').value,
            mods: mods
        }})
    }}).then(function () {{ location.reload(); }});
}});

document.querySelectorAll('.delete-form').forEach(function (form) {{
    form.addEventListener('submit', function (e) {{
        e.preventDefault();
        fetch('/delete', {{
            method: 'POST',
            headers: {{'Content-Type': 'application/json'}},
            body: JSON.stringify({{uuid: form.querySelector('.delete-uuid').value}})
        }}).then(function () {{ location.reload(); }});
    }});
}});
</script>
</body>
</html>
"#,
        add_form = add_form(),
        fact_list = fact_list(store),
    )
}
