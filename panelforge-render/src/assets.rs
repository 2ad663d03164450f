//! Inline style and script blocks.
//!
//! The base style ships once per page render; image-select assets once per
//! renderer; gallery assets once per gallery field (their selectors carry
//! the field id). Templates use `__FIELD__` / `__PREVIEW__` placeholders
//! instead of format strings so the JS/CSS braces stay readable.

/// Field-row layout, appended once per rendered page.
pub const BASE_STYLE: &str = "\
.pf-field { padding: 10px 0; }
.pf-field .pf-field-title { display: inline-block; vertical-align: top; font-size: 14px; width: 160px; min-width: 160px; font-weight: 500; }
.pf-field .pf-field-inputs { display: inline-block; vertical-align: top; margin-left: 15px; width: 60%; min-width: 320px; }
.pf-field .pf-field-inputs input[type=text], .pf-field .pf-field-inputs input[type=number], .pf-field .pf-field-inputs textarea { border-radius: 4px; padding: 7px 5px; }
.pf-section-title { padding: 0; font-size: 16px; margin: 10px 0; }
.pf-disabled-notice { background: #ffe390; margin-left: 10px; padding: 5px 12px; font-size: 12px; border-radius: 3px; color: #717171; }
";

/// Image-select grid: hidden inputs, framed images, check badge.
pub const IMAGE_SELECT_STYLE: &str = "\
.pf-image-select > label { display: inline-block; width: 120px; margin: 0 15px 15px 0; position: relative; border: 1px solid #d1d1d1; border-radius: 5px; }
.pf-image-select > label.checked:after { content: '\\2714'; position: absolute; width: 30px; height: 30px; background: #4caf50; color: #fff; top: -10px; right: -10px; border-radius: 50%; text-align: center; line-height: 30px; }
.pf-image-select > label > input[type=radio], .pf-image-select > label > input[type=checkbox] { display: none; }
.pf-image-select > label > img { width: 100%; transition: 0.3s; border-radius: 5px; }
.pf-image-select > label.checked > img { opacity: 0.7; }
";

/// Toggles the `checked` class as hidden inputs change; radio grids clear
/// their siblings first.
pub const IMAGE_SELECT_SCRIPT: &str = "\
document.addEventListener('change', function (event) {
    var input = event.target;
    if (!input.closest || !input.closest('.pf-image-select')) return;
    var grid = input.closest('.pf-image-select');
    if (input.type === 'radio') {
        grid.querySelectorAll('label').forEach(function (label) {
            label.classList.remove('checked');
        });
    }
    input.closest('label').classList.toggle('checked', input.checked);
});
";

const GALLERY_STYLE_TEMPLATE: &str = "\
#__PREVIEW__ > div { display: inline-block; vertical-align: top; width: 180px; border: 1px solid #ddd; padding: 12px; margin: 0 10px 10px 0; border-radius: 4px; position: relative; }
#__PREVIEW__ > div:hover span { display: block; }
#__PREVIEW__ > div > span { display: none; cursor: pointer; background: #ddd; padding: 2px 6px; position: absolute; top: 0; left: 0; font-size: 16px; border-bottom-right-radius: 4px; color: #c0392b; }
#__PREVIEW__ > div > img { width: 100%; cursor: move; }
";

/// Wires the select button to the host's media picker binding
/// (`window.PanelMediaPicker`) and makes the preview sortable by drag.
const GALLERY_SCRIPT_TEMPLATE: &str = "\
(function () {
    var preview = document.getElementById('__PREVIEW__');
    var button = document.getElementById('pf-gallery-add-__FIELD__');
    if (!preview || !button) return;
    button.addEventListener('click', function () {
        if (!window.PanelMediaPicker) return;
        window.PanelMediaPicker.open(function (attachment) {
            var entry = document.createElement('div');
            entry.draggable = true;
            entry.innerHTML =
                '<span class=\"pf-gallery-remove\" onclick=\"this.parentElement.remove()\">&times;</span>' +
                '<img src=\"' + attachment.url + '\" />' +
                '<input type=\"hidden\" name=\"__FIELD__[]\" value=\"' + attachment.id + '\" />';
            preview.appendChild(entry);
        });
    });
    var dragged = null;
    preview.addEventListener('dragstart', function (event) {
        dragged = event.target.closest('div');
    });
    preview.addEventListener('dragover', function (event) {
        event.preventDefault();
    });
    preview.addEventListener('drop', function (event) {
        event.preventDefault();
        var target = event.target.closest('div');
        if (dragged && target && target !== dragged && target.parentElement === preview) {
            preview.insertBefore(dragged, target);
        }
    });
})();
";

/// Per-field gallery style; `preview_id` is the preview container's id.
pub fn gallery_style(preview_id: &str) -> String {
    GALLERY_STYLE_TEMPLATE.replace("__PREVIEW__", preview_id)
}

/// Per-field gallery script.
pub fn gallery_script(field_id: &str, preview_id: &str) -> String {
    GALLERY_SCRIPT_TEMPLATE
        .replace("__PREVIEW__", preview_id)
        .replace("__FIELD__", field_id)
}
