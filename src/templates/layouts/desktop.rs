use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body {
  font-family: system-ui, sans-serif;
  margin: 0;
  background: #f5f6f8;
  color: #1a2732;
}
header.site {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 1.5rem;
  background: #fff;
  border-bottom: 3px solid #bca175;
}
header.site h1 {
  font-size: 1.3rem;
  color: #006ead;
  margin: 0;
}
main.container {
  max-width: 1100px;
  margin: 0 auto;
  padding: 1rem 1.5rem 3rem;
}
section.card {
  background: #fff;
  border-radius: 8px;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
  padding: 1rem 1.25rem;
  margin-top: 1.25rem;
}
section.card h3 {
  margin-top: 0;
}
.toolbar {
  display: flex;
  gap: 1rem;
  align-items: center;
  flex-wrap: wrap;
  margin-top: 1rem;
}
.toolbar .updated-at {
  margin-left: auto;
  color: #006ead;
}
.toolbar select, .toolbar button {
  padding: 0.4rem 0.8rem;
  font-size: 1rem;
}
.stat-row {
  display: flex;
  gap: 2rem;
  justify-content: center;
  margin-top: 1rem;
}
.stat {
  text-align: center;
}
.stat .stat-value {
  display: block;
  font-size: 1.6rem;
  font-weight: bold;
}
.stat .stat-label {
  color: #555;
}
.bar-row {
  display: grid;
  grid-template-columns: 16rem 1fr 4rem;
  gap: 0.5rem;
  align-items: center;
  margin: 0.3rem 0;
}
.bar-label {
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}
.bar-track {
  background: #e8eaee;
  border-radius: 4px;
  height: 1.1rem;
}
.bar-fill {
  height: 100%;
  border-radius: 4px;
}
.bar-value {
  text-align: right;
}
.tables {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1.25rem;
}
table {
  width: 100%;
  border-collapse: collapse;
  font-size: 0.95rem;
}
th, td {
  text-align: left;
  padding: 0.4rem 0.6rem;
  border-bottom: 1px solid #e8eaee;
}
th {
  background: #f0f2f5;
}
td.num, th.num {
  text-align: right;
}
.download {
  display: inline-block;
  margin-top: 0.75rem;
}
.empty {
  color: #777;
  font-style: italic;
}
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header class="site" {
                    h1 { "Processos Seletivos" }
                }
                (content)
            }
        }
    }
}
