pub fn render_index(today: &str) -> String {
    INDEX_HTML.replace("{{TODAY}}", today)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap');

    :root {
      --bg: #0f172a;
      --panel: #1e293b;
      --panel-soft: rgba(30, 41, 59, 0.6);
      --border: #334155;
      --ink: #e2e8f0;
      --muted: #94a3b8;
      --green: #34d399;
      --blue: #60a5fa;
      --purple: #c084fc;
      --amber: #fbbf24;
      --red: #f87171;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, #0f172a, #1e293b 60%, #0f172a 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1080px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    header h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      background: linear-gradient(90deg, var(--green), var(--blue));
      -webkit-background-clip: text;
      background-clip: text;
      color: transparent;
    }

    header p {
      margin: 6px 0 0;
      color: var(--muted);
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
    }

    .card {
      background: var(--panel-soft);
      border: 1px solid var(--border);
      border-radius: 16px;
      padding: 16px;
    }

    .card .value {
      font-size: 1.8rem;
      font-weight: 600;
    }

    .card .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
      margin-top: 4px;
    }

    .value.green { color: var(--green); }
    .value.blue { color: var(--blue); }
    .value.purple { color: var(--purple); }
    .value.amber { color: var(--amber); }

    .panel {
      background: var(--panel-soft);
      border: 1px solid var(--border);
      border-radius: 18px;
      padding: 22px;
    }

    .panel h2 {
      margin: 0 0 14px;
      font-size: 1.2rem;
    }

    .heatmap-scroll {
      overflow-x: auto;
      padding-bottom: 6px;
    }

    .months {
      display: flex;
      height: 18px;
      position: relative;
      margin-bottom: 6px;
      min-width: max-content;
    }

    .months span {
      position: absolute;
      font-size: 11px;
      color: var(--muted);
    }

    #grid {
      display: flex;
      gap: 3px;
      min-width: max-content;
    }

    .week {
      display: flex;
      flex-direction: column;
      gap: 3px;
    }

    .cell {
      width: 13px;
      height: 13px;
      border-radius: 3px;
      background: #1e293b;
      border: 1px solid #334155;
    }

    .cell.l1 { background: rgba(52, 211, 153, 0.35); border-color: rgba(52, 211, 153, 0.3); }
    .cell.l2 { background: rgba(52, 211, 153, 0.55); border-color: rgba(52, 211, 153, 0.4); }
    .cell.l3 { background: rgba(52, 211, 153, 0.8); border-color: rgba(52, 211, 153, 0.5); }
    .cell.l4 { background: #34d399; border-color: #6ee7b7; }
    .cell.today { outline: 2px solid var(--blue); outline-offset: 1px; }

    .legend {
      display: flex;
      align-items: center;
      gap: 6px;
      margin-top: 12px;
      font-size: 12px;
      color: var(--muted);
    }

    .legend .cell { cursor: default; }

    .columns {
      display: grid;
      grid-template-columns: minmax(260px, 1fr) 2fr;
      gap: 24px;
      align-items: start;
    }

    @media (max-width: 760px) {
      .columns { grid-template-columns: 1fr; }
    }

    form#add-form {
      display: grid;
      gap: 10px;
    }

    input, select {
      width: 100%;
      padding: 10px 12px;
      border-radius: 10px;
      background: var(--panel);
      border: 1px solid var(--border);
      color: var(--ink);
      font: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 10px;
      padding: 10px 14px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      color: white;
      background: linear-gradient(90deg, #059669, #10b981);
    }

    button:disabled {
      opacity: 0.5;
      cursor: not-allowed;
    }

    .tabs {
      display: flex;
      gap: 6px;
      margin: 12px 0;
      flex-wrap: wrap;
    }

    .tab {
      background: var(--panel);
      border: 1px solid var(--border);
      color: var(--muted);
      font-weight: 500;
    }

    .tab.active {
      background: linear-gradient(90deg, #2563eb, #3b82f6);
      border-color: transparent;
      color: white;
    }

    ul#habit-list {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    .habit {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      background: var(--panel);
      border: 1px solid var(--border);
      border-radius: 12px;
      padding: 12px 14px;
    }

    .habit .name {
      font-weight: 600;
    }

    .habit .meta {
      font-size: 0.8rem;
      color: var(--muted);
    }

    .habit.done {
      border-color: rgba(52, 211, 153, 0.5);
    }

    .habit.done .name { color: var(--green); }

    .habit .buttons {
      display: flex;
      gap: 8px;
      flex-shrink: 0;
    }

    .btn-toggle {
      background: linear-gradient(90deg, #2563eb, #3b82f6);
    }

    .btn-delete {
      background: transparent;
      border: 1px solid var(--border);
      color: var(--red);
    }

    .empty {
      text-align: center;
      color: var(--muted);
      padding: 28px 8px;
    }

    .status {
      font-size: 0.9rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] { color: var(--red); }
    .status[data-type="ok"] { color: var(--green); }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Tracker</h1>
      <p>Build better habits, one day at a time. Today is {{TODAY}}.</p>
    </header>

    <section class="cards">
      <div class="card">
        <div class="value" id="sum-total">0</div>
        <div class="label">Total Habits</div>
      </div>
      <div class="card">
        <div class="value green" id="sum-completed">0</div>
        <div class="label">Completed Today</div>
      </div>
      <div class="card">
        <div class="value blue" id="sum-active">0</div>
        <div class="label">Active Habits</div>
      </div>
      <div class="card">
        <div class="value purple" id="sum-rate">0%</div>
        <div class="label">Completion Rate</div>
      </div>
    </section>

    <section class="panel">
      <h2>Activity Overview</h2>
      <div class="cards" style="margin-bottom: 16px;">
        <div class="card">
          <div class="value" id="hm-days">0</div>
          <div class="label">Days Completed</div>
        </div>
        <div class="card">
          <div class="value green" id="hm-rate">0%</div>
          <div class="label">Consistency</div>
        </div>
        <div class="card">
          <div class="value blue" id="hm-current">0</div>
          <div class="label">Current Streak</div>
        </div>
        <div class="card">
          <div class="value purple" id="hm-longest">0</div>
          <div class="label">Longest Streak</div>
        </div>
      </div>
      <div class="heatmap-scroll">
        <div class="months" id="months"></div>
        <div id="grid"></div>
      </div>
      <div class="legend">
        <span>Less</span>
        <div class="cell"></div>
        <div class="cell l1"></div>
        <div class="cell l2"></div>
        <div class="cell l3"></div>
        <div class="cell l4"></div>
        <span>More</span>
      </div>
    </section>

    <section class="columns">
      <div class="panel">
        <h2>Add Habit</h2>
        <form id="add-form">
          <input id="habit-name" placeholder="Enter habit name" autocomplete="off" />
          <button type="submit" id="add-btn">Add Habit</button>
        </form>
      </div>

      <div class="panel">
        <h2>Your Habits</h2>
        <select id="sort">
          <option value="">Default</option>
          <option value="name">Name (A-Z)</option>
          <option value="currentStreak">Current Streak</option>
          <option value="longestStreak">Longest Streak</option>
        </select>
        <div class="tabs" role="tablist">
          <button class="tab active" type="button" data-view="all">All</button>
          <button class="tab" type="button" data-view="active">Active</button>
          <button class="tab" type="button" data-view="completed">Completed</button>
        </div>
        <ul id="habit-list"></ul>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const monthNames = [
      'Jan', 'Feb', 'Mar', 'Apr', 'May', 'Jun',
      'Jul', 'Aug', 'Sep', 'Oct', 'Nov', 'Dec'
    ];

    const statusEl = document.getElementById('status');
    const listEl = document.getElementById('habit-list');
    const sortEl = document.getElementById('sort');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    let view = 'all';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const setText = (id, value) => {
      document.getElementById(id).textContent = value;
    };

    const loadHeatmap = async () => {
      const res = await fetch('/api/heatmap');
      if (!res.ok) {
        throw new Error('Unable to load heatmap');
      }
      renderHeatmap(await res.json());
    };

    const renderHeatmap = (data) => {
      setText('sum-total', data.summary.total);
      setText('sum-completed', data.summary.completed_today);
      setText('sum-active', data.summary.active);
      setText('sum-rate', data.summary.completion_rate + '%');
      setText('hm-days', data.stats.completed_days);
      setText('hm-rate', data.stats.completion_percentage + '%');
      setText('hm-current', data.stats.current_streak);
      setText('hm-longest', data.stats.longest_streak);

      const monthsEl = document.getElementById('months');
      monthsEl.innerHTML = '';
      for (const marker of data.months) {
        const label = document.createElement('span');
        label.textContent = monthNames[marker.month];
        label.style.left = (marker.week * 16) + 'px';
        monthsEl.appendChild(label);
      }

      const grid = document.getElementById('grid');
      grid.innerHTML = '';
      for (let week = 0; week * 7 < data.days.length; week += 1) {
        const column = document.createElement('div');
        column.className = 'week';
        for (let day = 0; day < 7; day += 1) {
          const cell = data.days[week * 7 + day];
          if (!cell) {
            break;
          }
          const el = document.createElement('div');
          el.className = 'cell' + (cell.intensity > 0 ? ' l' + cell.intensity : '');
          if (cell.date === data.today) {
            el.classList.add('today');
          }
          el.title = cell.completed
            ? cell.date + ': completed' + (cell.streak > 1 ? ' (' + cell.streak + ' day streak)' : '')
            : cell.date + ': not completed';
          column.appendChild(el);
        }
        grid.appendChild(column);
      }
    };

    const loadHabits = async () => {
      const params = new URLSearchParams();
      if (sortEl.value) {
        params.set('sort', sortEl.value);
      }
      if (view !== 'all') {
        params.set('view', view);
      }
      const query = params.toString();
      const res = await fetch('/api/habits' + (query ? '?' + query : ''));
      if (!res.ok) {
        throw new Error('Unable to load habits');
      }
      renderHabits(await res.json());
    };

    const renderHabits = (habits) => {
      listEl.innerHTML = '';
      if (!habits.length) {
        const empty = document.createElement('li');
        empty.className = 'empty';
        empty.textContent = view === 'completed'
          ? 'No habits completed yet today.'
          : view === 'active'
            ? 'No active habits. All done!'
            : 'No habits yet. Create your first one.';
        listEl.appendChild(empty);
        return;
      }

      for (const habit of habits) {
        const item = document.createElement('li');
        item.className = 'habit' + (habit.completed ? ' done' : '');

        const info = document.createElement('div');
        const name = document.createElement('div');
        name.className = 'name';
        name.textContent = habit.name;
        const meta = document.createElement('div');
        meta.className = 'meta';
        meta.textContent = habit.streak === 1
          ? '1 day streak'
          : habit.streak + ' day streak';
        info.appendChild(name);
        info.appendChild(meta);

        const buttons = document.createElement('div');
        buttons.className = 'buttons';
        const toggle = document.createElement('button');
        toggle.className = 'btn-toggle';
        toggle.textContent = habit.completed ? 'Undo' : 'Done';
        toggle.addEventListener('click', () => toggleHabit(habit.id));
        const del = document.createElement('button');
        del.className = 'btn-delete';
        del.textContent = 'Delete';
        del.addEventListener('click', () => deleteHabit(habit));
        buttons.appendChild(toggle);
        buttons.appendChild(del);

        item.appendChild(info);
        item.appendChild(buttons);
        listEl.appendChild(item);
      }
    };

    const refresh = async () => {
      await Promise.all([loadHabits(), loadHeatmap()]);
    };

    const createHabit = async (name) => {
      const res = await fetch('/api/habits', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ name })
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Unable to create habit');
      }
      await refresh();
      setStatus('Habit added', 'ok');
    };

    const toggleHabit = async (id) => {
      const res = await fetch('/api/habits/' + id + '/toggle', { method: 'POST' });
      if (!res.ok) {
        throw new Error(await res.text() || 'Unable to update habit');
      }
      await refresh();
    };

    const deleteHabit = async (habit) => {
      if (!confirm('Delete "' + habit.name + '"? This cannot be undone.')) {
        return;
      }
      const res = await fetch('/api/habits/' + habit.id, { method: 'DELETE' });
      if (!res.ok) {
        throw new Error(await res.text() || 'Unable to delete habit');
      }
      await refresh();
      setStatus('Habit deleted', 'ok');
    };

    document.getElementById('add-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const input = document.getElementById('habit-name');
      const name = input.value.trim();
      if (!name) {
        return;
      }
      input.value = '';
      createHabit(name).catch((err) => setStatus(err.message, 'error'));
    });

    sortEl.addEventListener('change', () => {
      loadHabits().catch((err) => setStatus(err.message, 'error'));
    });

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        view = button.dataset.view;
        tabs.forEach((tab) => tab.classList.toggle('active', tab === button));
        loadHabits().catch((err) => setStatus(err.message, 'error'));
      });
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
