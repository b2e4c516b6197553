//! Static landing page
//!
//! A single HTML page: placeholder tabs, the welcome copy shown while no
//! source is registered, and a small form UI driving the JSON API. All
//! quiz logic stays server-side; the page only renders what the API
//! returns.

use axum::response::Html;

/// GET / - Landing page
pub async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>QuizForge</title>
<style>
  body { font-family: sans-serif; margin: 0; display: flex; min-height: 100vh; }
  aside { width: 280px; padding: 1rem; background: #f4f4f4; border-right: 1px solid #ddd; }
  main { flex: 1; padding: 2rem; max-width: 720px; }
  .tabs button { margin-right: 0.25rem; }
  .tab-panel { padding: 0.5rem 0; }
  fieldset { border: none; padding: 0.5rem 0; }
  .question { margin-bottom: 1.5rem; }
  .verdict-correct { color: #1a7f37; }
  .verdict-incorrect { color: #cf222e; }
  .error { color: #cf222e; white-space: pre-wrap; }
  label { display: block; margin: 0.2rem 0; }
</style>
</head>
<body>
<aside>
  <h2>QuizForge</h2>
  <p>Choose what you want to use.</p>
  <select id="mode" onchange="switchMode()">
    <option value="file">File</option>
    <option value="wikipedia">Wikipedia Article</option>
  </select>
  <div id="file-panel">
    <p>Upload a .docx, .txt or .pdf file</p>
    <input type="file" id="file" accept=".pdf,.txt,.docx">
    <button onclick="uploadFile()">Upload</button>
  </div>
  <div id="wiki-panel" hidden>
    <p>Search Wikipedia...</p>
    <input type="text" id="topic">
    <button onclick="searchWikipedia()">Search</button>
  </div>
  <p id="status"></p>
</aside>
<main>
  <div class="tabs">
    <button onclick="showTab('a')">A</button>
    <button onclick="showTab('b')">B</button>
    <button onclick="showTab('c')">C</button>
  </div>
  <div class="tab-panel" id="tab-a">a</div>
  <div class="tab-panel" id="tab-b" hidden>b</div>
  <div class="tab-panel" id="tab-c" hidden>c</div>
  <hr>
  <div id="welcome">
    <h1>QuizForge</h1>
    <p>Welcome to QuizForge.</p>
    <p>I will make a quiz from Wikipedia articles or files you upload to test
    your knowledge and help you study.</p>
    <p>Get started by uploading a file or searching on Wikipedia in the sidebar.</p>
  </div>
  <form id="quiz-form" hidden onsubmit="return submitAnswers(event)">
    <div id="questions"></div>
    <button type="submit">Submit</button>
  </form>
  <p id="error" class="error"></p>
</main>
<script>
let currentSource = null;
let currentQuiz = null;

function showTab(name) {
  for (const t of ['a', 'b', 'c']) {
    document.getElementById('tab-' + t).hidden = t !== name;
  }
}

function switchMode() {
  const mode = document.getElementById('mode').value;
  document.getElementById('file-panel').hidden = mode !== 'file';
  document.getElementById('wiki-panel').hidden = mode !== 'wikipedia';
}

function setStatus(text) { document.getElementById('status').textContent = text; }
function setError(text) { document.getElementById('error').textContent = text; }

async function api(path, options) {
  const res = await fetch(path, options);
  const body = await res.json();
  if (!res.ok) {
    throw new Error(body.error ? body.error.message : res.statusText);
  }
  return body;
}

async function uploadFile() {
  const input = document.getElementById('file');
  if (!input.files.length) return;
  setError('');
  setStatus('Loading file...');
  try {
    const form = new FormData();
    form.append('file', input.files[0]);
    const body = await api('/api/sources/upload', { method: 'POST', body: form });
    await loadQuiz(body.source.label);
  } catch (err) {
    setStatus('');
    setError(err.message);
  }
}

async function searchWikipedia() {
  const topic = document.getElementById('topic').value.trim();
  if (!topic) return;
  setError('');
  setStatus('Searching Wikipedia...');
  try {
    const body = await api('/api/sources/wikipedia', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ topic }),
    });
    if (!body.found) {
      setStatus('No matching article.');
      showWelcome();
      return;
    }
    await loadQuiz(body.source.label);
  } catch (err) {
    setStatus('');
    setError(err.message);
  }
}

async function loadQuiz(label) {
  setStatus('Making quiz...');
  const body = await api('/api/quiz', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ source: label }),
  });
  currentSource = label;
  currentQuiz = body.quiz;
  setStatus('');
  renderQuiz(body.quiz);
}

function showWelcome() {
  document.getElementById('welcome').hidden = false;
  document.getElementById('quiz-form').hidden = true;
}

function renderQuiz(quiz) {
  document.getElementById('welcome').hidden = true;
  const container = document.getElementById('questions');
  container.innerHTML = '';
  quiz.questions.forEach((q, i) => {
    const div = document.createElement('div');
    div.className = 'question';
    const title = document.createElement('p');
    title.textContent = q.question;
    div.appendChild(title);
    q.answers.forEach((a) => {
      const label = document.createElement('label');
      const radio = document.createElement('input');
      radio.type = 'radio';
      radio.name = 'question-' + i;
      radio.value = a.answer;
      label.appendChild(radio);
      label.appendChild(document.createTextNode(' ' + a.answer));
      div.appendChild(label);
    });
    const verdict = document.createElement('p');
    verdict.id = 'verdict-' + i;
    div.appendChild(verdict);
    container.appendChild(div);
  });
  document.getElementById('quiz-form').hidden = false;
}

async function submitAnswers(event) {
  event.preventDefault();
  const selections = currentQuiz.questions.map((_, i) => {
    const checked = document.querySelector('input[name="question-' + i + '"]:checked');
    return checked ? checked.value : null;
  });
  try {
    const body = await api('/api/quiz/grade', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ source: currentSource, selections }),
    });
    body.verdicts.forEach((verdict, i) => {
      const el = document.getElementById('verdict-' + i);
      if (verdict === 'correct') {
        el.textContent = 'Correct!';
        el.className = 'verdict-correct';
      } else if (verdict === 'incorrect') {
        el.textContent = 'Wrong';
        el.className = 'verdict-incorrect';
      } else {
        el.textContent = '';
      }
    });
  } catch (err) {
    setError(err.message);
  }
  return false;
}
</script>
</body>
</html>
"#;
