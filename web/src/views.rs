//! HTML fragment rendering.
//!
//! Pure functions from todos to markup. The client behavior lives entirely in
//! the `hx-*` attributes emitted here, so the route strings, targets and swap
//! strategies below are the contract with the browser:
//!
//! | Element | Request | Target | Swap |
//! |---|---|---|---|
//! | region in the shell | `GET /todos` on `load` | itself | `innerHTML` |
//! | form | `POST /todos` on submit | itself | `beforebegin` |
//! | checkbox | `POST /todos/toggle/{id}` on `change` | `#todo-{id}` | `outerHTML` |
//! | delete button | `DELETE /todos/{id}` on click | `#todo-{id}` | `outerHTML` |

use hx_todo_core::Todo;

/// htmx build loaded by the page shell.
pub const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.10";

/// Id of the region that receives the list fragment.
pub const TODO_REGION_ID: &str = "todos";

/// Escape text for use in element content and double-quoted attributes.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// DOM id of a todo row.
#[must_use]
pub fn row_id(todo: &Todo) -> String {
    format!("todo-{}", todo.id)
}

/// A single todo row.
///
/// The checkbox and delete button both address the row by id, so a toggle
/// replaces the row in place and a delete (empty response) removes it.
#[must_use]
pub fn render_item(todo: &Todo) -> String {
    let id = todo.id;
    let row = row_id(todo);
    let checked = if todo.completed { " checked" } else { "" };
    let class = if todo.completed {
        "todo-item completed"
    } else {
        "todo-item"
    };

    format!(
        concat!(
            r##"<div id="{row}" class="{class}">"##,
            r##"<input type="checkbox" hx-post="/todos/toggle/{id}" hx-trigger="change" hx-target="#{row}" hx-swap="outerHTML"{checked} />"##,
            r##"<p>{content}</p>"##,
            r##"<button hx-delete="/todos/{id}" hx-target="#{row}" hx-swap="outerHTML">X</button>"##,
            r##"</div>"##,
        ),
        row = row,
        class = class,
        id = id,
        checked = checked,
        content = escape_html(&todo.content),
    )
}

/// The creation form.
///
/// The form is its own target and swaps `beforebegin`, so each new row lands
/// directly above the form. The input is cleared after every request,
/// whatever the response.
#[must_use]
pub fn render_form() -> String {
    concat!(
        r#"<form class="todo-form" hx-post="/todos" hx-swap="beforebegin" hx-on::after-request="this.reset()">"#,
        r#"<input type="text" name="content" placeholder="What needs doing?" />"#,
        r#"<button type="submit">Add</button>"#,
        r#"</form>"#,
    )
    .to_string()
}

/// Every todo in storage order, followed by the creation form.
#[must_use]
pub fn render_list(todos: &[Todo]) -> String {
    let mut out = String::new();
    for todo in todos {
        out.push_str(&render_item(todo));
    }
    out.push_str(&render_form());
    out
}

/// The dynamic region: empty until its `load` trigger fetches the list.
#[must_use]
pub fn todo_region() -> String {
    format!(
        r#"<div id="{TODO_REGION_ID}" hx-get="/todos" hx-trigger="load" hx-swap="innerHTML"></div>"#
    )
}

/// Full HTML document wrapping `body`.
#[must_use]
pub fn render_shell(body: &str) -> String {
    format!(
        concat!(
            "<!doctype html>",
            r#"<html lang="en">"#,
            "<head>",
            r#"<meta charset="UTF-8" />"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0" />"#,
            "<title>Todo</title>",
            r#"<script src="{htmx}"></script>"#,
            "</head>",
            "<body>{body}</body>",
            "</html>",
        ),
        htmx = HTMX_SRC,
        body = body,
    )
}
