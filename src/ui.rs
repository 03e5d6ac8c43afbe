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
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1080px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: flex-end;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.2rem;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
    }

    .layout {
      display: grid;
      grid-template-columns: minmax(260px, 1fr) 2fr;
      gap: 24px;
    }

    .panel {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 12px;
      align-content: start;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: #8b857d;
    }

    input, select {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      color: var(--ink);
      text-transform: none;
      letter-spacing: normal;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
    }

    .btn-ghost {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .btn-danger {
      background: transparent;
      color: #c63b2b;
      padding: 6px 10px;
    }

    .habit-list {
      display: grid;
      gap: 8px;
    }

    .habit-item {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 8px;
      padding: 12px;
      border-radius: 14px;
      border: 1px solid rgba(47, 72, 88, 0.1);
      cursor: pointer;
    }

    .habit-item.active {
      border-color: var(--accent);
      box-shadow: 0 8px 16px rgba(255, 107, 74, 0.15);
    }

    .habit-name {
      font-weight: 600;
    }

    .badge {
      display: inline-block;
      margin: 4px 6px 0 0;
      padding: 2px 8px;
      border-radius: 999px;
      font-size: 0.75rem;
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .log-row {
      display: flex;
      flex-wrap: wrap;
      align-items: flex-end;
      gap: 12px;
    }

    .streak {
      font-size: 1.05rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .charts {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 16px;
    }

    .chart-card svg {
      width: 100%;
      height: 220px;
      display: block;
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .caption, .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    @media (max-width: 760px) {
      .app {
        padding: 28px 22px;
      }
      .layout {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Habit Tracker</h1>
        <p class="subtitle" id="today-text">{{TODAY}}</p>
      </div>
      <button class="btn-ghost" id="reset-btn" type="button">Reset all</button>
    </header>

    <section class="layout">
      <div class="panel">
        <h2>New habit</h2>
        <form id="habit-form">
          <label>Name <input id="habit-name" required /></label>
          <label>Type
            <select id="habit-type">
              <option value="tick">Tick</option>
              <option value="numeric">Numeric</option>
            </select>
          </label>
          <div id="unit-wrap">
            <label>Unit <input id="habit-unit" placeholder="km, pages, glasses" /></label>
            <label>Target <input id="habit-target" type="number" step="any" /></label>
          </div>
          <label>Rank <input id="habit-rank" placeholder="A" /></label>
          <button class="btn-primary" type="submit">Add habit</button>
        </form>
        <h2>Habits</h2>
        <div class="habit-list" id="habit-list"></div>
      </div>

      <div class="panel">
        <div class="log-row">
          <label>Date <input id="log-date" type="date" value="{{TODAY}}" /></label>
          <div class="streak" id="streak-text">Select a habit to view streak.</div>
        </div>
        <div id="selected-area"></div>
        <div class="charts">
          <div class="chart-card">
            <svg id="chart-main" viewBox="0 0 320 220" role="img" aria-label="Main chart"></svg>
            <p class="caption" id="caption-main"></p>
          </div>
          <div class="chart-card">
            <svg id="chart-secondary" viewBox="0 0 320 220" role="img" aria-label="Secondary chart"></svg>
            <p class="caption" id="caption-secondary"></p>
          </div>
        </div>
      </div>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Habits are stored on this machine. Streaks and charts follow the chosen date.</p>
  </main>

  <script>
    const $ = (id) => document.getElementById(id);
    const els = {
      todayText: $('today-text'),
      resetBtn: $('reset-btn'),
      form: $('habit-form'),
      name: $('habit-name'),
      type: $('habit-type'),
      unit: $('habit-unit'),
      target: $('habit-target'),
      rank: $('habit-rank'),
      unitWrap: $('unit-wrap'),
      list: $('habit-list'),
      logDate: $('log-date'),
      streak: $('streak-text'),
      area: $('selected-area'),
      chartMain: $('chart-main'),
      chartSecondary: $('chart-secondary'),
      captionMain: $('caption-main'),
      captionSecondary: $('caption-secondary'),
      status: $('status')
    };
    const PALETTE = ['#ff6b4a', '#2f4858', '#f5a65b', '#86bbd8'];

    const setStatus = (message, type) => {
      els.status.textContent = message;
      els.status.dataset.type = type || '';
    };

    const escapeHtml = (value) => String(value)
      .replaceAll('&', '&amp;')
      .replaceAll('<', '&lt;')
      .replaceAll('>', '&gt;')
      .replaceAll('"', '&quot;')
      .replaceAll("'", '&#039;');

    const anchor = () => els.logDate.value || '{{TODAY}}';

    const request = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: body === undefined ? {} : { 'content-type': 'application/json' },
        body: body === undefined ? undefined : JSON.stringify(body)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const renderPie = (svg, chart) => {
      const values = chart.series[0].data;
      const total = values.reduce((a, b) => a + b, 0);
      if (!total) {
        svg.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }
      const cx = 110, cy = 110, r = 90;
      let angle = -Math.PI / 2;
      let slices = '';
      values.forEach((value, i) => {
        if (!value) return;
        const color = PALETTE[i % PALETTE.length];
        if (value === total) {
          slices += `<circle cx="${cx}" cy="${cy}" r="${r}" fill="${color}" />`;
          return;
        }
        const sweep = (value / total) * Math.PI * 2;
        const x1 = cx + r * Math.cos(angle), y1 = cy + r * Math.sin(angle);
        angle += sweep;
        const x2 = cx + r * Math.cos(angle), y2 = cy + r * Math.sin(angle);
        const large = sweep > Math.PI ? 1 : 0;
        slices += `<path d="M ${cx} ${cy} L ${x1.toFixed(2)} ${y1.toFixed(2)} A ${r} ${r} 0 ${large} 1 ${x2.toFixed(2)} ${y2.toFixed(2)} Z" fill="${color}" />`;
      });
      const legend = chart.labels
        .map((label, i) => `
          <rect x="220" y="${60 + i * 24}" width="12" height="12" rx="3" fill="${PALETTE[i % PALETTE.length]}" />
          <text class="chart-label" x="238" y="${70 + i * 24}">${escapeHtml(label)} (${values[i]})</text>`)
        .join('');
      svg.innerHTML = slices + legend;
    };

    const renderBar = (svg, chart) => {
      const width = 320, height = 220, padX = 30, padY = 28, top = 16;
      const values = chart.series[0].data;
      const max = Math.max(1, ...values);
      const slot = (width - padX * 2) / values.length;
      const scale = (height - top - padY) / max;
      let bars = `<line class="chart-grid" x1="${padX}" y1="${height - padY}" x2="${width - padX}" y2="${height - padY}" />`;
      bars += `<text class="chart-label" x="${padX - 6}" y="${top + 4}" text-anchor="end">${max}</text>`;
      values.forEach((value, i) => {
        const h = Math.max(0, value) * scale;
        const x = padX + i * slot + slot * 0.15;
        bars += `<rect x="${x.toFixed(2)}" y="${(height - padY - h).toFixed(2)}" width="${(slot * 0.7).toFixed(2)}" height="${h.toFixed(2)}" rx="4" fill="${PALETTE[0]}" />`;
        bars += `<text class="chart-label" x="${(x + slot * 0.35).toFixed(2)}" y="${height - padY + 16}" text-anchor="middle">${escapeHtml(chart.labels[i])}</text>`;
      });
      svg.innerHTML = bars;
    };

    const renderChart = (svg, caption, chart) => {
      if (!chart) {
        svg.innerHTML = '';
        caption.textContent = '';
        return;
      }
      if (chart.kind === 'pie') {
        renderPie(svg, chart);
      } else {
        renderBar(svg, chart);
      }
      caption.textContent = chart.caption || chart.series[0].label;
    };

    const renderList = (habits) => {
      if (!habits.length) {
        els.list.innerHTML = '<p class="hint">No habits yet. Create one above.</p>';
        return;
      }
      els.list.innerHTML = habits.map((h) => {
        const badges = [`<span class="badge">Rank ${escapeHtml(h.rank)}</span>`,
          `<span class="badge">${h.type === 'tick' ? 'Tick' : 'Numeric'}</span>`];
        if (h.type === 'numeric' && h.target !== null) {
          badges.push(`<span class="badge">Target ${h.target}${h.unit ? ' ' + escapeHtml(h.unit) : ''}</span>`);
        }
        if (h.unit) badges.push(`<span class="badge">Unit ${escapeHtml(h.unit)}</span>`);
        return `
          <div class="habit-item${h.selected ? ' active' : ''}" data-id="${escapeHtml(h.id)}">
            <div>
              <div class="habit-name">${escapeHtml(h.name)}</div>
              <div>${badges.join('')}</div>
            </div>
            <button class="btn-danger" type="button" data-del="${escapeHtml(h.id)}">Delete</button>
          </div>`;
      }).join('');
    };

    const renderSelected = (view, anchorLabel) => {
      if (!view) {
        els.streak.textContent = 'Select a habit to view streak.';
        els.area.innerHTML = '<p class="hint">No habit selected. Choose a habit to log and view charts.</p>';
        renderChart(els.chartMain, els.captionMain, null);
        renderChart(els.chartSecondary, els.captionSecondary, null);
        return;
      }
      const h = view.habit;
      els.streak.textContent = view.streak_text;
      if (h.type === 'tick') {
        els.area.innerHTML = `
          <div class="log-row">
            <label>Done on ${escapeHtml(anchorLabel)}?
              <input id="tick-input" type="checkbox" ${view.entry === true ? 'checked' : ''} />
            </label>
            <button class="btn-ghost" id="clear-log" type="button">Clear</button>
          </div>`;
        $('tick-input').addEventListener('change', (event) => {
          saveLog(h.id, event.target.checked);
        });
      } else {
        const value = typeof view.entry === 'number' ? view.entry : '';
        const unit = h.unit ? ` (${escapeHtml(h.unit)})` : '';
        els.area.innerHTML = `
          <div class="log-row">
            <label>Value${unit} for ${escapeHtml(anchorLabel)}
              <input id="num-input" type="number" step="any" value="${value}" placeholder="0" />
            </label>
            <button class="btn-primary" id="save-log" type="button">Save</button>
            <button class="btn-ghost" id="clear-log" type="button">Clear</button>
          </div>`;
        $('save-log').addEventListener('click', () => saveLog(h.id, $('num-input').value));
      }
      $('clear-log').addEventListener('click', () => clearLog(h.id));
      renderChart(els.chartMain, els.captionMain, view.main);
      renderChart(els.chartSecondary, els.captionSecondary, view.secondary);
    };

    const render = (dashboard) => {
      renderList(dashboard.habits);
      renderSelected(dashboard.selected, dashboard.anchor_label);
    };

    const refresh = async () => {
      render(await request('GET', `/api/dashboard?date=${anchor()}`));
    };

    const run = (action) => {
      action().then(refresh).catch((err) => setStatus(err.message, 'error'));
    };

    const saveLog = (id, value) => run(() =>
      request('PUT', `/api/habits/${encodeURIComponent(id)}/logs/${anchor()}`, { value }));

    const clearLog = (id) => run(() =>
      request('DELETE', `/api/habits/${encodeURIComponent(id)}/logs/${anchor()}`));

    const syncTypeUI = () => {
      const numeric = els.type.value === 'numeric';
      els.unitWrap.style.display = numeric ? 'block' : 'none';
      if (!numeric) {
        els.unit.value = '';
        els.target.value = '';
      }
    };

    els.type.addEventListener('change', syncTypeUI);

    els.form.addEventListener('submit', (event) => {
      event.preventDefault();
      const name = els.name.value.trim();
      if (!name) return;
      const body = {
        name,
        type: els.type.value,
        unit: els.unit.value.trim(),
        target: els.target.value,
        rank: els.rank.value
      };
      run(async () => {
        const habit = await request('POST', '/api/habits', body);
        await request('POST', `/api/select?date=${anchor()}`, { id: habit.id });
        els.name.value = '';
        els.unit.value = '';
        els.target.value = '';
        syncTypeUI();
      });
    });

    els.list.addEventListener('click', (event) => {
      const del = event.target.dataset && event.target.dataset.del;
      if (del) {
        run(() => request('DELETE', `/api/habits/${encodeURIComponent(del)}`));
        return;
      }
      const item = event.target.closest('.habit-item');
      if (item) {
        request('POST', `/api/select?date=${anchor()}`, { id: item.dataset.id })
          .then(render)
          .catch((err) => setStatus(err.message, 'error'));
      }
    });

    els.logDate.addEventListener('change', () => {
      refresh().catch((err) => setStatus(err.message, 'error'));
    });

    els.resetBtn.addEventListener('click', () => {
      const ok = confirm('Reset all habits and logs? This cannot be undone.');
      if (!ok) return;
      run(() => request('POST', '/api/reset', { confirm: true }));
    });

    syncTypeUI();
    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
