pub const WIDGET_CSS: &str = r#"
.contributors-widget {
  display: block;
  padding: 1rem;
  font-family: "Segoe UI", Tahoma, Geneva, Verdana, sans-serif;
}

.repo-link {
  font-size: 1rem;
  font-weight: bold;
  margin-bottom: 1rem;
  color: #555;
}

.contributors-widget .repo-link a {
  text-decoration: none;
  color: #0366d6;
}

.container {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
  gap: 1rem;
}

.card {
  text-align: center;
  background: white;
  border-radius: 10px;
  padding: 1rem;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
  transition: transform 0.2s, box-shadow 0.2s;
}

.card:hover {
  transform: translateY(-4px);
  box-shadow: 0 6px 18px rgba(0, 0, 0, 0.15);
}

.contributors-widget a {
  text-decoration: none;
  color: inherit;
}

rpg-character,
.avatar {
  display: inline-block;
  height: 100px;
  width: 100px;
  transition: transform 0.3s ease;
}

.card:hover rpg-character,
.card:hover .avatar {
  transform: scale(1.1);
}

.username {
  font-size: 0.95rem;
  margin-top: 0.4rem;
  font-weight: 600;
}

.contribs {
  font-size: 0.85rem;
  color: #777;
}

.show-more {
  margin-top: 1rem;
  text-align: center;
}

.show-more button {
  background-color: #0366d6;
  color: white;
  border: none;
  padding: 0.5rem 1.2rem;
  border-radius: 5px;
  cursor: pointer;
  font-size: 1rem;
}

.show-more button:hover {
  background-color: #024f9f;
}

.generated {
  margin-top: 2rem;
  font-size: 0.75rem;
  color: #999;
  text-align: center;
}
"#;
