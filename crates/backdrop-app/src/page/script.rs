//! Page wiring script served as `backdrop://app.js`.
//!
//! Forwards user interactions to Rust over the IPC bridge and re-renders
//! the menu/showcase DOM from the state payloads Rust pushes back. The
//! background itself is mutated by scripts Rust evaluates directly.

pub(super) const PAGE_SCRIPT: &str = r#"(function() {
  'use strict';

  function ipc() {
    return window.backdrop.ipc;
  }

  function send(kind, payload) {
    ipc().send(kind, payload || null);
  }

  function wireMenu() {
    document.querySelectorAll('.nav-button[data-category]').forEach(function(button) {
      button.addEventListener('click', function(ev) {
        ev.stopPropagation();
        send('menu_toggle', { category: button.dataset.category });
      });
    });

    document.querySelectorAll('.dropdown-item[data-mode]').forEach(function(item) {
      item.addEventListener('click', function() {
        send('background_select', {
          mode: item.dataset.mode,
          value: item.dataset.value
        });
      });
    });

    // Clicking outside the navbar closes any open dropdown
    document.addEventListener('mousedown', function(ev) {
      if (!ev.target.closest('.navbar-container')) {
        send('menu_dismiss');
      }
    });
  }

  function wirePicker() {
    var colorInput = document.getElementById('color-input');
    var pickerItem = document.getElementById('color-picker-item');

    pickerItem.addEventListener('click', function() {
      // Open the native picker first, then close the dropdown
      setTimeout(function() {
        colorInput.click();
        send('menu_dismiss');
      }, 0);
    });

    colorInput.addEventListener('change', function() {
      send('color_picked', { value: colorInput.value });
    });
  }

  function wireUpload() {
    var fileInput = document.getElementById('file-input');

    document.getElementById('upload-button').addEventListener('click', function() {
      fileInput.click();
    });

    fileInput.addEventListener('change', function() {
      var file = fileInput.files && fileInput.files[0];
      if (!file) {
        return;
      }

      var reader = new FileReader();
      reader.onload = function() {
        // Strip the data-URL prefix; Rust wants raw base64
        var data = String(reader.result).split(',')[1] || '';
        send('upload_file', { name: file.name, mime: file.type, data: data });
      };
      reader.readAsDataURL(file);

      // Reset the input so the same file can be selected again
      fileInput.value = '';
    });
  }

  function wireShowcase() {
    document.getElementById('count-button').addEventListener('click', function() {
      send('showcase_increment');
    });

    var textInput = document.getElementById('text-input');
    textInput.addEventListener('input', function() {
      send('showcase_input', { value: textInput.value });
    });

    document.getElementById('switch-input').addEventListener('change', function(ev) {
      send('showcase_switch', { on: ev.target.checked });
    });

    document.getElementById('checkbox-input').addEventListener('change', function(ev) {
      send('showcase_checkbox', { on: ev.target.checked });
    });
  }

  function onMenuState(state) {
    document.querySelectorAll('.nav-item-wrapper[data-category]').forEach(function(wrapper) {
      wrapper.classList.toggle('open', wrapper.dataset.category === state.open);
    });
  }

  function onShowcaseState(state) {
    document.getElementById('count-label').textContent = String(state.count);

    var textInput = document.getElementById('text-input');
    if (textInput.value !== state.input) {
      textInput.value = state.input;
    }
    document.getElementById('input-echo').textContent = state.input || '(empty)';

    document.getElementById('switch-input').checked = state.switch_on;
    document.getElementById('switch-label').textContent = state.switch_on ? 'ON' : 'OFF';

    document.getElementById('checkbox-input').checked = state.checkbox_on;
    document.getElementById('checkbox-label').textContent =
      state.checkbox_on ? 'Checked' : 'Unchecked';

    document.getElementById('progress-fill').style.width = state.progress + '%';
    document.getElementById('progress-label').textContent = state.progress + '%';
  }

  document.addEventListener('DOMContentLoaded', function() {
    wireMenu();
    wirePicker();
    wireUpload();
    wireShowcase();

    ipc().on('menu_state', onMenuState);
    ipc().on('showcase_state', onShowcaseState);

    send('page_ready');
  });
})();
"#;
